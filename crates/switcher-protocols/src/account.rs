//! Account records managed by the store.

use serde::Serialize;
use std::fmt;

/// Handle to one account inside a store.
///
/// Handles are allocated by the store for the lifetime of the process and
/// are never persisted. Two accounts with the same username still have
/// distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One registered username/password pair.
///
/// The password is opaque and kept verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub password: String,
    pub is_active: bool,
}

impl Account {
    /// Create an inactive account.
    pub fn new(id: AccountId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            is_active: false,
        }
    }
}

// Keeps passwords out of `{:?}` output and therefore out of log lines.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("is_active", &self.is_active)
            .finish()
    }
}
