//! Roster persistence format.
//!
//! The whole roster lives in one cookie (`users` by default). Its value is
//! the percent-encoded JSON array
//!
//! ```text
//! [{"username":"alice","password":"p1","isActive":false}, ...]
//! ```
//!
//! `isActive` is written for compatibility with older readers but ignored on
//! load: the active selection never survives a reload.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use switcher_protocols::{Account, Cookie};

use crate::error::CodecError;

/// Characters left alone by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A username/password pair read back from the cookie.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct StoredAccount<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(rename = "isActive")]
    is_active: bool,
}

/// Codec between a roster and its cookie.
#[derive(Debug, Clone)]
pub struct UsersCookie {
    name: String,
    path: String,
}

impl UsersCookie {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Build the `Set-Cookie` string carrying the full roster.
    pub fn encode(&self, accounts: &[Account]) -> Result<String, CodecError> {
        let stored: Vec<StoredAccount<'_>> = accounts
            .iter()
            .map(|a| StoredAccount {
                username: &a.username,
                password: &a.password,
                is_active: a.is_active,
            })
            .collect();
        let json = serde_json::to_string(&stored)?;
        let value = utf8_percent_encode(&json, COMPONENT).to_string();

        Ok(Cookie::new(&self.name, value)
            .with_path(&self.path)
            .to_set_cookie())
    }

    /// Read the roster out of a cookie header.
    ///
    /// A missing cookie and an unreadable one both give an empty roster.
    pub fn decode(&self, header: &str) -> Vec<Credentials> {
        let Some(value) = self.find_value(header) else {
            debug!("No '{}' cookie present, starting with an empty roster", self.name);
            return Vec::new();
        };

        match Self::decode_value(value) {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("Discarding unreadable '{}' cookie: {}", self.name, e);
                Vec::new()
            }
        }
    }

    /// Decode one raw (percent-encoded) cookie value.
    pub fn decode_value(value: &str) -> Result<Vec<Credentials>, CodecError> {
        let json = percent_decode_str(value).decode_utf8()?;
        Ok(serde_json::from_str(&json)?)
    }

    fn find_value<'h>(&self, header: &'h str) -> Option<&'h str> {
        Cookie::parse_header(header)
            .into_iter()
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value)
    }
}

impl Default for UsersCookie {
    fn default() -> Self {
        Self::new("users", "/")
    }
}

#[cfg(test)]
#[path = "users_cookie_tests.rs"]
mod tests;
