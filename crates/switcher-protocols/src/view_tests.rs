use super::*;

fn roster() -> View {
    View::Roster {
        entries: vec![
            RosterEntry {
                account: AccountId::new(1),
                username: "alice".to_string(),
                action: Action::LogIn(AccountId::new(1)),
            },
            RosterEntry {
                account: AccountId::new(2),
                username: "bob".to_string(),
                action: Action::LogIn(AccountId::new(2)),
            },
        ],
    }
}

fn profile() -> View {
    View::Profile(ProfileEntry {
        account: AccountId::new(1),
        username: "alice".to_string(),
        actions: vec![Action::LogOut, Action::Remove],
    })
}

#[test]
fn test_action_labels() {
    assert_eq!(Action::LogIn(AccountId::new(1)).label(), "Log In");
    assert_eq!(Action::LogOut.label(), "Log Out");
    assert_eq!(Action::Remove.label(), "Remove");
}

#[test]
fn test_action_slugs() {
    assert_eq!(Action::LogIn(AccountId::new(1)).slug(), "login");
    assert_eq!(Action::LogOut.slug(), "logout");
    assert_eq!(Action::Remove.slug(), "remove");
}

#[test]
fn test_form_visibility() {
    assert!(roster().form_visible());
    assert!(!profile().form_visible());
    assert!(View::Roster { entries: vec![] }.form_visible());
}

#[test]
fn test_actions_in_display_order() {
    assert_eq!(
        roster().actions(),
        vec![Action::LogIn(AccountId::new(1)), Action::LogIn(AccountId::new(2))]
    );
    assert_eq!(profile().actions(), vec![Action::LogOut, Action::Remove]);
}

#[test]
fn test_entry_is_one_based() {
    let view = roster();
    assert!(view.entry(0).is_none());
    assert_eq!(view.entry(1).unwrap().username, "alice");
    assert_eq!(view.entry(2).unwrap().username, "bob");
    assert!(view.entry(3).is_none());
    assert!(profile().entry(1).is_none());
}

#[test]
fn test_view_serialization() {
    let json = serde_json::to_value(profile()).unwrap();
    assert_eq!(json["kind"], "profile");
    assert_eq!(json["username"], "alice");
    assert_eq!(json["actions"][0]["action"], "log_out");

    let json = serde_json::to_value(roster()).unwrap();
    assert_eq!(json["kind"], "roster");
    assert_eq!(json["entries"][1]["action"]["account"], 2);
}

#[test]
fn test_null_renderer() {
    let mut renderer = NullRenderer;
    assert_eq!(renderer.id(), "null");
    assert!(renderer.render(&profile()).is_ok());
}

#[test]
fn test_boxed_renderer() {
    let mut renderer: Box<dyn Renderer> = Box::new(NullRenderer);
    assert_eq!(renderer.id(), "null");
    assert!(renderer.render(&roster()).is_ok());
}
