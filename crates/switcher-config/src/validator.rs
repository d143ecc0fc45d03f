//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Jar backends the host knows how to build.
pub const JAR_BACKENDS: [&str; 2] = ["file", "memory"];

/// Output formats the host knows how to render.
pub const VIEW_FORMATS: [&str; 3] = ["text", "html", "json"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_cookie(config, &mut result);
        Self::validate_jar(config, &mut result);
        Self::validate_view(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_cookie(config: &Config, result: &mut ValidationResult) {
        let name = &config.cookie.name;
        if name.is_empty() {
            result.add_error(ValidationError::new("cookie.name", "Cookie name cannot be empty"));
        } else if name
            .chars()
            .any(|c| c == '=' || c == ';' || c == ',' || c.is_whitespace() || c.is_control())
        {
            result.add_error(ValidationError::new(
                "cookie.name",
                format!("Cookie name '{}' contains a separator character", name),
            ));
        }

        if !config.cookie.path.starts_with('/') {
            result.add_error(ValidationError::new(
                "cookie.path",
                "Cookie path must start with '/'",
            ));
        } else if config.cookie.path.contains(';') {
            result.add_error(ValidationError::new(
                "cookie.path",
                "Cookie path cannot contain ';'",
            ));
        }
    }

    fn validate_jar(config: &Config, result: &mut ValidationResult) {
        if !JAR_BACKENDS.contains(&config.jar.backend.as_str()) {
            result.add_error(ValidationError::new(
                "jar.backend",
                format!(
                    "Unknown jar backend '{}', valid values: {:?}",
                    config.jar.backend, JAR_BACKENDS
                ),
            ));
        }

        if config.jar.backend == "file" && config.jar.path.as_os_str().is_empty() {
            result.add_error(ValidationError::new(
                "jar.path",
                "File jar needs a path",
            ));
        }

        if config.jar.backend == "memory" {
            result.add_warning(ValidationWarning::new(
                "jar.backend",
                "Memory jar keeps nothing once the process exits",
            ));
        }
    }

    fn validate_view(config: &Config, result: &mut ValidationResult) {
        if !VIEW_FORMATS.contains(&config.view.format.as_str()) {
            result.add_error(ValidationError::new(
                "view.format",
                format!(
                    "Unknown view format '{}', valid values: {:?}",
                    config.view.format, VIEW_FORMATS
                ),
            ));
        }

        if config.view.html_output.is_some() && config.view.format != "html" {
            result.add_warning(ValidationWarning::new(
                "view.html_output",
                "html_output is only used with the html format",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
