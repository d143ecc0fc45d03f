//! In-process cookie jar.

use switcher_protocols::{Cookie, CookieJar, JarError};

/// Cookie jar kept in memory.
///
/// Used on its own for sessions that should not outlive the process, and as
/// the working set of jars that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: Vec<Cookie>,
}

impl MemoryCookieJar {
    /// Create an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a jar holding the cookies of a header string (`a=1; b=2`).
    pub fn from_header(header: &str) -> Self {
        let cookies = Cookie::parse_header(header)
            .into_iter()
            .map(|(name, value)| Cookie::new(name, value))
            .collect();
        Self { cookies }
    }

    /// Create a jar from already parsed cookies.
    pub fn from_cookies(cookies: Vec<Cookie>) -> Self {
        Self { cookies }
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    /// Most specific cookie with the given name.
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.ordered().into_iter().find(|c| c.name == name)
    }

    /// Cookies with longer paths first, insertion order otherwise, the way a
    /// browser lists them in `document.cookie`.
    fn ordered(&self) -> Vec<&Cookie> {
        let mut cookies: Vec<&Cookie> = self.cookies.iter().collect();
        cookies.sort_by_key(|c| std::cmp::Reverse(c.path.as_deref().map_or(1, str::len)));
        cookies
    }

    /// Insert or replace by name and path.
    pub fn insert(&mut self, cookie: Cookie) {
        match self
            .cookies
            .iter_mut()
            .find(|c| c.name == cookie.name && c.path == cookie.path)
        {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }
}

impl CookieJar for MemoryCookieJar {
    fn id(&self) -> &str {
        "memory"
    }

    fn header(&self) -> Result<String, JarError> {
        Ok(Cookie::format_header(self.ordered()))
    }

    fn set(&mut self, set_cookie: &str) -> Result<(), JarError> {
        self.insert(Cookie::parse(set_cookie)?);
        Ok(())
    }
}
