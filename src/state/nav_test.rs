use super::*;
use crate::state::session::SessionConfig;

fn service_session(did: &str, config_did: &str) -> Session {
    Session {
        did: did.to_owned(),
        handle: None,
        config: SessionConfig {
            did: Some(config_did.to_owned()),
        },
    }
}

fn flagged_names(session: Option<&Session>) -> Vec<&'static str> {
    visible_items(session)
        .into_iter()
        .map(|item| item.name)
        .collect()
}

// =============================================================
// visible_items filtering
// =============================================================

#[test]
fn flagged_items_hidden_without_session() {
    assert!(!flagged_names(None).contains(&"Configure"));
}

#[test]
fn flagged_items_hidden_for_regular_session() {
    let s = service_session("did:plc:someone", "did:plc:mod");
    assert!(!flagged_names(Some(&s)).contains(&"Configure"));
}

#[test]
fn flagged_items_visible_for_service_account() {
    let s = service_session("did:plc:mod", "did:plc:mod");
    assert!(flagged_names(Some(&s)).contains(&"Configure"));
}

#[test]
fn unflagged_items_always_visible() {
    let names = flagged_names(None);
    assert!(names.contains(&"Queue"));
    assert!(names.contains(&"Toggle Theme"));
}

#[test]
fn filtering_preserves_display_order() {
    let s = service_session("did:plc:mod", "did:plc:mod");
    let all: Vec<_> = nav_items().into_iter().map(|i| i.name).collect();
    assert_eq!(flagged_names(Some(&s)), all);
}

// =============================================================
// is_current
// =============================================================

#[test]
fn root_href_matches_root_only() {
    let queue = &nav_items()[0];
    assert!(is_current("/", queue));
    assert!(!is_current("/configure", queue));
}

#[test]
fn nested_paths_match_their_section() {
    let configure = nav_items()
        .into_iter()
        .find(|i| i.name == "Configure")
        .unwrap();
    assert!(is_current("/configure", &configure));
    assert!(is_current("/configure/labels", &configure));
    assert!(!is_current("/", &configure));
}

#[test]
fn action_items_are_never_current() {
    let theme = nav_items()
        .into_iter()
        .find(|i| i.name == "Toggle Theme")
        .unwrap();
    assert!(!is_current("/", &theme));
}
