//! Cookie jar errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid cookie: {0}")]
    InvalidCookie(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cookie_error() {
        let err = JarError::InvalidCookie("missing '='".to_string());
        let display = err.to_string();
        assert!(display.contains("Invalid cookie"));
        assert!(display.contains("missing '='"));
    }

    #[test]
    fn test_serialization_error() {
        let err = JarError::Serialization("bad json".to_string());
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = JarError::from(io_err);
        assert!(matches!(err, JarError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }
}
