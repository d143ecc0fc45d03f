//! HTML renderer for the Switcher widget.
//!
//! Produces the widget fragment: the add-account form (shown or hidden)
//! followed by the account list. Buttons carry `data-action` and, for log
//! in, `data-account` so a page script can map clicks back to actions.

mod markup;
mod renderer;

pub use markup::{escape, to_markup};
pub use renderer::HtmlRenderer;
