//! Cookie jar protocol definitions.
//!
//! A jar is the persistence medium of the widget. It mirrors the browser's
//! `document.cookie`: reading yields every cookie as one header string,
//! writing takes a single `Set-Cookie` style string.

use crate::error::JarError;

/// Core trait for cookie jars.
pub trait CookieJar {
    /// Returns the jar ID.
    fn id(&self) -> &str;

    /// All cookies as `name=value; name2=value2`, in insertion order.
    fn header(&self) -> Result<String, JarError>;

    /// Store a cookie given as `name=value; path=/`.
    ///
    /// A cookie with the same name and path replaces the stored one.
    fn set(&mut self, set_cookie: &str) -> Result<(), JarError>;
}

impl<T: CookieJar + ?Sized> CookieJar for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn header(&self) -> Result<String, JarError> {
        (**self).header()
    }

    fn set(&mut self, set_cookie: &str) -> Result<(), JarError> {
        (**self).set(set_cookie)
    }
}
