//! # Switcher Protocols
//!
//! Core protocol definitions for the Switcher account widget.
//! Contains only interface definitions and shared value types.
//!
//! ## Core Traits
//!
//! - [`CookieJar`] - Persistence medium with `document.cookie` semantics
//! - [`Renderer`] - Turns a [`View`] into visible output

pub mod account;
pub mod cookie;
pub mod error;
pub mod jar;
pub mod view;

pub use account::{Account, AccountId};
pub use cookie::Cookie;
pub use error::{JarError, RenderError};
pub use jar::CookieJar;
pub use view::{Action, NullRenderer, ProfileEntry, Renderer, RosterEntry, View};
