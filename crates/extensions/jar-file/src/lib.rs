//! File-backed cookie jar for Switcher.
//!
//! Cookies are kept in memory and the whole jar is rewritten after every
//! change, so the roster survives the process the same way a browser keeps
//! its cookies between page loads.
//!
//! ## Storage Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "cookies": [
//!     { "name": "users", "value": "%5B%5D", "path": "/" }
//!   ]
//! }
//! ```

mod backend;
mod error;

pub use backend::FileCookieJar;
pub use error::FileJarError;
