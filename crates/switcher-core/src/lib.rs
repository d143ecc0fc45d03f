//! # Switcher Core
//!
//! The account store and everything it needs to run without a UI:
//!
//! - [`AccountStore`] - roster, active pointer, persist-then-render on every change
//! - [`UsersCookie`] - encoding of the roster into a single cookie
//! - [`MemoryCookieJar`] - in-process jar
//! - [`Page`] - one store plus the add-account form, dispatching [`Action`]s
//!
//! [`Action`]: switcher_protocols::Action

pub mod error;
pub mod form;
pub mod jar;
pub mod page;
pub mod store;
pub mod users_cookie;
pub mod view;

pub use error::CodecError;
pub use form::AccountForm;
pub use jar::MemoryCookieJar;
pub use page::Page;
pub use store::{AccountStore, StoreSettings};
pub use users_cookie::{Credentials, UsersCookie};
pub use view::build_view;
