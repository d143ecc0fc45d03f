//! Page controller: one store plus the add-account form.
//!
//! The host owns exactly one `Page` per session and feeds it UI events:
//! form submissions and the [`Action`]s offered by the rendered view.

use tracing::debug;

use switcher_protocols::{AccountId, Action, CookieJar, Renderer};

use crate::form::AccountForm;
use crate::store::{AccountStore, StoreSettings};

pub struct Page<J: CookieJar, R: Renderer> {
    store: AccountStore<J, R>,
    form: AccountForm,
}

impl<J: CookieJar, R: Renderer> Page<J, R> {
    /// Page load: hydrate the store and draw it.
    pub fn load(jar: J, renderer: R, settings: StoreSettings) -> Self {
        Self {
            store: AccountStore::open(jar, renderer, settings),
            form: AccountForm::new(),
        }
    }

    pub fn store(&self) -> &AccountStore<J, R> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AccountStore<J, R> {
        &mut self.store
    }

    pub fn form(&self) -> &AccountForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AccountForm {
        &mut self.form
    }

    /// Submit the form: add the typed account, then clear both fields.
    pub fn submit(&mut self) -> AccountId {
        let (username, password) = self.form.take();
        self.store.add_account(username, password)
    }

    /// Run the store operation behind a rendered action.
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatching '{}'", action.slug());
        match action {
            Action::LogIn(id) => {
                self.store.set_active(id);
            }
            Action::LogOut => {
                self.store.logout();
            }
            Action::Remove => {
                self.store.remove_active();
            }
        }
    }

    /// Give up the page, keeping the store.
    pub fn into_store(self) -> AccountStore<J, R> {
        self.store
    }
}
