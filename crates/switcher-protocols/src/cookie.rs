//! Cookie string primitives shared by jars and the roster codec.

use serde::{Deserialize, Serialize};

use crate::error::JarError;

/// A single cookie as held by a jar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    /// Raw value, kept exactly as written (still percent-encoded).
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Parse a `Set-Cookie` style string such as `users=...; path=/`.
    ///
    /// Attribute names are case-insensitive; attributes other than `path`
    /// are accepted and dropped.
    pub fn parse(set_cookie: &str) -> Result<Self, JarError> {
        let mut parts = set_cookie.split(';');
        let pair = parts.next().unwrap_or_default().trim();
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| JarError::InvalidCookie(format!("missing '=' in {:?}", pair)))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(JarError::InvalidCookie("empty cookie name".to_string()));
        }

        let mut cookie = Cookie::new(name, value.trim());
        for attribute in parts {
            let (key, val) = match attribute.split_once('=') {
                Some((k, v)) => (k.trim(), v.trim()),
                None => (attribute.trim(), ""),
            };
            if key.eq_ignore_ascii_case("path") && !val.is_empty() {
                cookie.path = Some(val.to_string());
            }
        }

        Ok(cookie)
    }

    /// Format back into a `Set-Cookie` style string.
    pub fn to_set_cookie(&self) -> String {
        match &self.path {
            Some(path) => format!("{}={}; path={}", self.name, self.value, path),
            None => format!("{}={}", self.name, self.value),
        }
    }

    /// Split a cookie header (`a=1; b=2`) into name/value pairs.
    ///
    /// Segments without `=` are skipped. Values may themselves contain `=`.
    pub fn parse_header(header: &str) -> Vec<(&str, &str)> {
        header
            .split(';')
            .filter_map(|segment| {
                let (name, value) = segment.trim().split_once('=')?;
                Some((name.trim(), value.trim()))
            })
            .filter(|(name, _)| !name.is_empty())
            .collect()
    }

    /// Join cookies into a header string.
    pub fn format_header<'a>(cookies: impl IntoIterator<Item = &'a Cookie>) -> String {
        cookies
            .into_iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
#[path = "cookie_tests.rs"]
mod tests;
