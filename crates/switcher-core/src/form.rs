//! The add-account form.

use std::fmt;

/// Field values of the add-account form.
///
/// Submitting hands both values over and clears the fields.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub username: String,
    pub password: String,
}

impl AccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both fields.
    pub fn fill(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.username = username.into();
        self.password = password.into();
    }

    /// Take the field values, leaving both fields empty.
    pub fn take(&mut self) -> (String, String) {
        (
            std::mem::take(&mut self.username),
            std::mem::take(&mut self.password),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for AccountForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountForm")
            .field("username", &self.username)
            .field("password_len", &self.password.len())
            .finish()
    }
}
