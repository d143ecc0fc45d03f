//! View model and renderer protocol.
//!
//! The store never touches a concrete UI. After every mutation it builds a
//! [`View`] and hands it to a [`Renderer`]; user interactions come back as
//! [`Action`] values naming the store operation to run.

use serde::Serialize;

use crate::account::AccountId;
use crate::error::RenderError;

/// A user-triggerable operation offered by a rendered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "account", rename_all = "snake_case")]
pub enum Action {
    /// Make this account the active one.
    LogIn(AccountId),
    /// Deactivate the active account, keeping it in the roster.
    LogOut,
    /// Delete the active account from the roster.
    Remove,
}

impl Action {
    /// Button text.
    pub fn label(&self) -> &'static str {
        match self {
            Action::LogIn(_) => "Log In",
            Action::LogOut => "Log Out",
            Action::Remove => "Remove",
        }
    }

    /// Stable identifier, suitable for markup attributes and commands.
    pub fn slug(&self) -> &'static str {
        match self {
            Action::LogIn(_) => "login",
            Action::LogOut => "logout",
            Action::Remove => "remove",
        }
    }
}

/// The single profile entry shown while an account is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileEntry {
    pub account: AccountId,
    pub username: String,
    pub actions: Vec<Action>,
}

/// One inactive account listed while nobody is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub account: AccountId,
    pub username: String,
    pub action: Action,
}

/// What the widget should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// An account is active: form hidden, one profile entry.
    Profile(ProfileEntry),
    /// Nobody is active: form shown, one entry per account.
    Roster { entries: Vec<RosterEntry> },
}

impl View {
    /// Whether the add-account form is visible.
    pub fn form_visible(&self) -> bool {
        matches!(self, View::Roster { .. })
    }

    /// Every action on screen, in display order.
    pub fn actions(&self) -> Vec<Action> {
        match self {
            View::Profile(profile) => profile.actions.clone(),
            View::Roster { entries } => entries.iter().map(|e| e.action).collect(),
        }
    }

    /// Roster entry by 1-based position.
    pub fn entry(&self, number: usize) -> Option<&RosterEntry> {
        match self {
            View::Roster { entries } => number.checked_sub(1).and_then(|i| entries.get(i)),
            View::Profile(_) => None,
        }
    }
}

/// Core trait for renderers.
pub trait Renderer {
    /// Returns the renderer ID.
    fn id(&self) -> &str;

    /// Draw the given view, replacing whatever was drawn before.
    fn render(&mut self, view: &View) -> Result<(), RenderError>;
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn render(&mut self, view: &View) -> Result<(), RenderError> {
        (**self).render(view)
    }
}

/// Renderer that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn id(&self) -> &str {
        "null"
    }

    fn render(&mut self, _view: &View) -> Result<(), RenderError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
