use super::*;
use crate::jar::MemoryCookieJar;
use switcher_protocols::{Action, JarError, NullRenderer, RenderError};

/// Renderer that keeps every view it was handed.
#[derive(Default)]
struct RecordingRenderer {
    views: Vec<View>,
}

impl Renderer for RecordingRenderer {
    fn id(&self) -> &str {
        "recording"
    }

    fn render(&mut self, view: &View) -> Result<(), RenderError> {
        self.views.push(view.clone());
        Ok(())
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn id(&self) -> &str {
        "failing"
    }

    fn render(&mut self, _view: &View) -> Result<(), RenderError> {
        Err(RenderError::Custom("display gone".to_string()))
    }
}

/// Jar whose reads and writes always fail.
struct BrokenJar {
    writes: usize,
}

impl CookieJar for BrokenJar {
    fn id(&self) -> &str {
        "broken"
    }

    fn header(&self) -> Result<String, JarError> {
        Err(JarError::Serialization("corrupt".to_string()))
    }

    fn set(&mut self, _set_cookie: &str) -> Result<(), JarError> {
        self.writes += 1;
        Err(JarError::Io(std::io::Error::other("disk full")))
    }
}

fn empty_store() -> AccountStore<MemoryCookieJar, RecordingRenderer> {
    AccountStore::open(
        MemoryCookieJar::new(),
        RecordingRenderer::default(),
        StoreSettings::default(),
    )
}

fn usernames<J: CookieJar, R: Renderer>(store: &AccountStore<J, R>) -> Vec<&str> {
    store.accounts().iter().map(|a| a.username.as_str()).collect()
}

fn assert_single_active<J: CookieJar, R: Renderer>(store: &AccountStore<J, R>) {
    let flagged: Vec<_> = store.accounts().iter().filter(|a| a.is_active).collect();
    match store.active_account() {
        Some(active) => {
            assert_eq!(flagged.len(), 1);
            assert_eq!(flagged[0].id, active.id);
        }
        None => assert!(flagged.is_empty()),
    }
}

fn persisted(store: &AccountStore<MemoryCookieJar, RecordingRenderer>) -> Vec<String> {
    let header = store.jar().header().unwrap();
    UsersCookie::default()
        .decode(&header)
        .into_iter()
        .map(|c| c.username)
        .collect()
}

#[test]
fn test_open_renders_once() {
    let store = empty_store();
    assert!(store.is_empty());
    assert_eq!(store.renderer().views, vec![View::Roster { entries: vec![] }]);
}

#[test]
fn test_open_does_not_write() {
    let store = empty_store();
    assert_eq!(store.jar().header().unwrap(), "");
}

#[test]
fn test_open_hydrates_inactive_accounts() {
    let jar = MemoryCookieJar::from_header(
        "users=%5B%7B%22username%22%3A%22x%22%2C%22password%22%3A%22y%22%2C%22isActive%22%3Atrue%7D%5D",
    );
    let store = AccountStore::open(jar, RecordingRenderer::default(), StoreSettings::default());

    assert_eq!(store.len(), 1);
    assert_eq!(store.accounts()[0].username, "x");
    assert_eq!(store.accounts()[0].password, "y");
    assert!(!store.accounts()[0].is_active);
    assert!(store.active_account().is_none());
    assert!(store.renderer().views[0].form_visible());
}

#[test]
fn test_open_with_custom_cookie_name() {
    let jar = MemoryCookieJar::from_header(
        "users=%5B%5D; accounts=%5B%7B%22username%22%3A%22x%22%2C%22password%22%3A%22y%22%7D%5D",
    );
    let settings = StoreSettings {
        cookie_name: "accounts".to_string(),
        cookie_path: "/".to_string(),
    };
    let store = AccountStore::open(jar, NullRenderer, settings);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_open_with_malformed_cookie() {
    let jar = MemoryCookieJar::from_header("users=%5B%7Bbroken");
    let store = AccountStore::open(jar, RecordingRenderer::default(), StoreSettings::default());
    assert!(store.is_empty());
    assert_eq!(store.renderer().views.len(), 1);
}

#[test]
fn test_add_account_activates_it() {
    let mut store = empty_store();
    let id = store.add_account("alice", "p1");

    assert_eq!(store.len(), 1);
    assert_eq!(store.active_id(), Some(id));
    assert_eq!(store.active_account().unwrap().username, "alice");
    assert_single_active(&store);
}

#[test]
fn test_add_account_persists_and_renders_once() {
    let mut store = empty_store();
    store.add_account("alice", "p1");

    assert_eq!(persisted(&store), vec!["alice"]);
    // initial render + one for the add
    assert_eq!(store.renderer().views.len(), 2);
    assert!(!store.renderer().views[1].form_visible());
}

#[test]
fn test_add_account_accepts_empty_and_duplicate_values() {
    let mut store = empty_store();
    let first = store.add_account("", "");
    let second = store.add_account("", "");

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
    assert_eq!(store.active_id(), Some(second));
    assert_single_active(&store);
}

#[test]
fn test_set_active_switches_flag() {
    let mut store = empty_store();
    let alice = store.add_account("alice", "p1");
    let bob = store.add_account("bob", "p2");

    assert!(store.set_active(alice));
    assert_eq!(store.active_id(), Some(alice));
    assert!(!store.get(bob).unwrap().is_active);
    assert_single_active(&store);
}

#[test]
fn test_set_active_unknown_id_is_noop() {
    let mut store = empty_store();
    let alice = store.add_account("alice", "p1");
    let renders = store.renderer().views.len();

    assert!(!store.set_active(AccountId::new(999)));
    assert_eq!(store.active_id(), Some(alice));
    assert_eq!(store.renderer().views.len(), renders);
}

#[test]
fn test_set_active_on_active_account() {
    let mut store = empty_store();
    let alice = store.add_account("alice", "p1");

    assert!(store.set_active(alice));
    assert_eq!(store.active_id(), Some(alice));
    assert_single_active(&store);
}

#[test]
fn test_remove_active_deletes_account() {
    let mut store = empty_store();
    store.add_account("alice", "p1");
    store.add_account("bob", "p2");

    let removed = store.remove_active().unwrap();
    assert_eq!(removed.username, "bob");
    assert_eq!(usernames(&store), vec!["alice"]);
    assert!(store.active_account().is_none());
    assert_eq!(persisted(&store), vec!["alice"]);
    assert_single_active(&store);
}

#[test]
fn test_remove_active_removes_only_that_duplicate() {
    let mut store = empty_store();
    let first = store.add_account("same", "a");
    let second = store.add_account("same", "b");
    store.set_active(first);

    store.remove_active();
    assert_eq!(store.len(), 1);
    assert_eq!(store.accounts()[0].id, second);
    assert_eq!(store.accounts()[0].password, "b");
}

#[test]
fn test_remove_without_active_is_noop() {
    let mut store = empty_store();
    store.add_account("alice", "p1");
    store.logout();
    let renders = store.renderer().views.len();

    assert!(store.remove_active().is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(store.renderer().views.len(), renders);
}

#[test]
fn test_logout_keeps_account() {
    let mut store = empty_store();
    let alice = store.add_account("alice", "p1");

    assert!(store.logout());
    assert!(store.active_account().is_none());
    assert!(!store.get(alice).unwrap().is_active);
    assert_eq!(store.len(), 1);

    let view = store.renderer().views.last().unwrap();
    assert_eq!(view.actions(), vec![Action::LogIn(alice)]);
}

#[test]
fn test_logout_twice_is_idempotent() {
    let mut store = empty_store();
    store.add_account("alice", "p1");

    assert!(store.logout());
    let header = store.jar().header().unwrap();
    let renders = store.renderer().views.len();
    let view = store.view();

    assert!(!store.logout());
    assert_eq!(store.jar().header().unwrap(), header);
    assert_eq!(store.renderer().views.len(), renders);
    assert_eq!(store.view(), view);
}

#[test]
fn test_mutations_persist_in_order() {
    let mut store = empty_store();
    store.add_account("alice", "p1");
    store.add_account("bob", "p2");
    store.add_account("carol", "p3");
    assert_eq!(persisted(&store), vec!["alice", "bob", "carol"]);

    let header = store.jar().header().unwrap();
    assert!(header.starts_with("users="));
    assert_eq!(store.jar().cookies()[0].path.as_deref(), Some("/"));
}

#[test]
fn test_reopen_drops_active_selection() {
    let mut store = empty_store();
    store.add_account("alice", "p1");
    store.add_account("bob", "p2");
    let jar = store.jar().clone();

    let reopened = AccountStore::open(jar, RecordingRenderer::default(), StoreSettings::default());
    assert_eq!(usernames(&reopened), vec!["alice", "bob"]);
    assert!(reopened.active_account().is_none());
    assert_eq!(reopened.renderer().views[0].actions().len(), 2);
}

#[test]
fn test_broken_jar_does_not_block_operations() {
    let jar = BrokenJar { writes: 0 };
    let mut store = AccountStore::open(jar, RecordingRenderer::default(), StoreSettings::default());
    assert!(store.is_empty());

    store.add_account("alice", "p1");
    assert_eq!(store.active_account().unwrap().username, "alice");
    assert_eq!(store.jar().writes, 1);
    assert_eq!(store.renderer().views.len(), 2);
}

#[test]
fn test_failing_renderer_does_not_block_operations() {
    let mut store = AccountStore::open(MemoryCookieJar::new(), FailingRenderer, StoreSettings::default());
    store.add_account("alice", "p1");
    assert_eq!(store.len(), 1);
    assert!(store.jar().header().unwrap().starts_with("users="));
}

#[test]
fn test_view_tracks_state() {
    let mut store = empty_store();
    let alice = store.add_account("alice", "p1");
    assert_eq!(store.view(), *store.renderer().views.last().unwrap());
    assert_eq!(store.view().actions(), vec![Action::LogOut, Action::Remove]);

    store.logout();
    assert_eq!(store.view().actions(), vec![Action::LogIn(alice)]);
}

#[test]
fn test_refresh_renders_without_writing() {
    let mut store = empty_store();
    store.refresh();
    assert_eq!(store.renderer().views.len(), 2);
    assert_eq!(store.jar().header().unwrap(), "");
}

#[test]
fn test_boxed_collaborators() {
    let jar: Box<dyn CookieJar> = Box::new(MemoryCookieJar::new());
    let renderer: Box<dyn Renderer> = Box::new(NullRenderer);
    let mut store = AccountStore::open(jar, renderer, StoreSettings::default());
    store.add_account("alice", "p1");
    assert!(store.jar().header().unwrap().starts_with("users="));
}

#[test]
fn test_reload_prefers_roster_under_longer_path() {
    let mut store = AccountStore::open(MemoryCookieJar::new(), NullRenderer, StoreSettings::default());
    store.add_account("old", "p1");
    let jar = store.jar().clone();

    let settings = StoreSettings {
        cookie_name: "users".to_string(),
        cookie_path: "/app".to_string(),
    };
    let mut store = AccountStore::open(jar, NullRenderer, settings.clone());
    store.add_account("new", "p2");
    let jar = store.jar().clone();
    assert_eq!(jar.cookies().len(), 2);

    let store = AccountStore::open(jar, NullRenderer, settings);
    let names: Vec<_> = store.accounts().iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, ["old", "new"]);
}
