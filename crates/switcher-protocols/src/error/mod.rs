//! Error types for the Switcher protocol layer.

mod jar;
mod render;

pub use jar::*;
pub use render::*;
