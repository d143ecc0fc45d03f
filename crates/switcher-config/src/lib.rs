//! # Switcher Config
//!
//! Configuration management for the Switcher host.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{
    ConfigValidator, JAR_BACKENDS, VIEW_FORMATS, ValidationError, ValidationResult,
    ValidationWarning,
};
