//! Builds the view model from store state.

use switcher_protocols::{Account, Action, ProfileEntry, RosterEntry, View};

/// Decide what the widget shows for the given roster and active account.
///
/// With an active account the form is hidden and only that account is
/// shown, offering log out and remove. Otherwise every inactive account is
/// listed with a log in action.
pub fn build_view(accounts: &[Account], active: Option<&Account>) -> View {
    if let Some(account) = active {
        return View::Profile(ProfileEntry {
            account: account.id,
            username: account.username.clone(),
            actions: vec![Action::LogOut, Action::Remove],
        });
    }

    let entries = accounts
        .iter()
        .filter(|a| !a.is_active)
        .map(|a| RosterEntry {
            account: a.id,
            username: a.username.clone(),
            action: Action::LogIn(a.id),
        })
        .collect();

    View::Roster { entries }
}
