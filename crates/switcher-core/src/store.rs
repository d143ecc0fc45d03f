//! The account store.
//!
//! Every mutating operation runs the same three steps in order: change the
//! in-memory roster, write the whole roster to the cookie jar, render.
//! Jar and renderer failures are logged and absorbed; the in-memory state
//! stays authoritative for the rest of the process.

use tracing::{debug, info, warn};

use switcher_protocols::{Account, AccountId, CookieJar, Renderer, View};

use crate::users_cookie::UsersCookie;
use crate::view::build_view;

/// Cookie settings for a store.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Name of the cookie holding the roster.
    pub cookie_name: String,
    /// Path attribute written with the cookie.
    pub cookie_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            cookie_name: "users".to_string(),
            cookie_path: "/".to_string(),
        }
    }
}

/// Roster of accounts with at most one active account.
pub struct AccountStore<J: CookieJar, R: Renderer> {
    accounts: Vec<Account>,
    active: Option<AccountId>,
    next_id: u64,
    codec: UsersCookie,
    jar: J,
    renderer: R,
}

impl<J: CookieJar, R: Renderer> AccountStore<J, R> {
    /// Hydrate a store from the jar and render it once.
    ///
    /// Accounts come back inactive; an unreadable roster yields an empty one.
    pub fn open(jar: J, renderer: R, settings: StoreSettings) -> Self {
        let mut store = Self {
            accounts: Vec::new(),
            active: None,
            next_id: 0,
            codec: UsersCookie::new(settings.cookie_name, settings.cookie_path),
            jar,
            renderer,
        };
        store.hydrate();
        store.render();
        store
    }

    fn hydrate(&mut self) {
        let header = match self.jar.header() {
            Ok(header) => header,
            Err(e) => {
                warn!("Failed to read cookies from '{}' jar: {}", self.jar.id(), e);
                return;
            }
        };

        for credentials in self.codec.decode(&header) {
            let id = self.allocate_id();
            self.accounts
                .push(Account::new(id, credentials.username, credentials.password));
        }

        info!(
            "Loaded {} accounts from '{}' jar",
            self.accounts.len(),
            self.jar.id()
        );
    }

    /// Register an account and make it the active one.
    ///
    /// No credential check of any kind takes place.
    pub fn add_account(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> AccountId {
        let id = self.allocate_id();
        let account = Account::new(id, username, password);
        debug!("Adding account {} '{}'", id, account.username);
        self.accounts.push(account);
        self.activate(id);
        self.commit();
        id
    }

    /// Make the given account the active one.
    ///
    /// Returns `false` and changes nothing when the handle is not in the
    /// roster.
    pub fn set_active(&mut self, id: AccountId) -> bool {
        if !self.activate(id) {
            debug!("Ignoring activation of unknown account {}", id);
            return false;
        }
        self.commit();
        true
    }

    /// Delete the active account from the roster.
    ///
    /// Returns the removed account, or `None` when nobody was active.
    pub fn remove_active(&mut self) -> Option<Account> {
        let Some(id) = self.active.take() else {
            debug!("Remove requested with no active account");
            return None;
        };

        let removed = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .map(|index| self.accounts.remove(index));
        if let Some(account) = &removed {
            debug!("Removed account {} '{}'", id, account.username);
        }

        self.commit();
        removed
    }

    /// Deactivate the active account, keeping it in the roster.
    ///
    /// Returns `false` when nobody was active.
    pub fn logout(&mut self) -> bool {
        let Some(id) = self.active.take() else {
            debug!("Logout requested with no active account");
            return false;
        };

        if let Some(account) = self.get_mut(id) {
            account.is_active = false;
        }
        debug!("Logged out account {}", id);

        self.commit();
        true
    }

    /// All accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn active_id(&self) -> Option<AccountId> {
        self.active
    }

    pub fn active_account(&self) -> Option<&Account> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Render the current state again without changing it.
    pub fn refresh(&mut self) {
        self.render();
    }

    /// The view for the current state.
    pub fn view(&self) -> View {
        build_view(&self.accounts, self.active_account())
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn allocate_id(&mut self) -> AccountId {
        let id = AccountId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// Move the active flag to `id`. Mutates only; no persist or render.
    fn activate(&mut self, id: AccountId) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        if let Some(previous) = self.active.take() {
            if let Some(account) = self.get_mut(previous) {
                account.is_active = false;
            }
        }
        if let Some(account) = self.get_mut(id) {
            account.is_active = true;
        }
        self.active = Some(id);
        true
    }

    fn commit(&mut self) {
        self.persist();
        self.render();
    }

    fn persist(&mut self) {
        let set_cookie = match self.codec.encode(&self.accounts) {
            Ok(set_cookie) => set_cookie,
            Err(e) => {
                warn!("Failed to encode roster: {}", e);
                return;
            }
        };

        match self.jar.set(&set_cookie) {
            Ok(()) => debug!(
                "Saved {} accounts to '{}' jar",
                self.accounts.len(),
                self.jar.id()
            ),
            Err(e) => warn!("Failed to save roster to '{}' jar: {}", self.jar.id(), e),
        }
    }

    fn render(&mut self) {
        let view = self.view();
        if let Err(e) = self.renderer.render(&view) {
            warn!("Renderer '{}' failed: {}", self.renderer.id(), e);
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
