//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cookie: CookieConfig,

    #[serde(default)]
    pub jar: JarConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Roster cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Name of the cookie holding the roster.
    #[serde(default = "default_cookie_name")]
    pub name: String,

    /// Path attribute written with the cookie.
    #[serde(default = "default_cookie_path")]
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            path: default_cookie_path(),
        }
    }
}

fn default_cookie_name() -> String {
    "users".to_string()
}

fn default_cookie_path() -> String {
    "/".to_string()
}

/// Cookie jar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarConfig {
    /// Jar backend ("file" or "memory").
    #[serde(default = "default_jar_backend")]
    pub backend: String,

    /// File used by the "file" backend.
    #[serde(default = "default_jar_path")]
    pub path: PathBuf,
}

impl Default for JarConfig {
    fn default() -> Self {
        Self {
            backend: default_jar_backend(),
            path: default_jar_path(),
        }
    }
}

fn default_jar_backend() -> String {
    "file".to_string()
}

fn default_jar_path() -> PathBuf {
    switcher_dir().join("cookies.json")
}

/// View configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Output format ("text", "html" or "json").
    #[serde(default = "default_view_format")]
    pub format: String,

    /// File rewritten with the widget markup on every render (html only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_output: Option<PathBuf>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            format: default_view_format(),
            html_output: None,
        }
    }
}

fn default_view_format() -> String {
    "text".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rolling log files. Console only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Base directory for Switcher state (`~/.switcher`).
pub fn switcher_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".switcher"))
        .unwrap_or_else(|| PathBuf::from("/tmp/switcher"))
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
