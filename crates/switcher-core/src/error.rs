//! Roster codec errors.

use thiserror::Error;

/// Reasons a persisted roster could not be read back.
///
/// These never reach store callers; the store logs them and starts empty.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Cookie value is not valid UTF-8 after decoding: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Roster JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
