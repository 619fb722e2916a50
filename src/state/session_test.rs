use super::*;

fn session(did: &str, config_did: Option<&str>) -> Session {
    Session {
        did: did.to_owned(),
        handle: None,
        config: SessionConfig {
            did: config_did.map(str::to_owned),
        },
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_has_no_session() {
    let state = SessionState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
}

// =============================================================
// is_service_account
// =============================================================

#[test]
fn no_session_is_not_service_account() {
    assert!(!is_service_account(None));
}

#[test]
fn matching_identity_is_service_account() {
    let s = session("did:plc:mod", Some("did:plc:mod"));
    assert!(is_service_account(Some(&s)));
}

#[test]
fn mismatched_identity_is_not_service_account() {
    let s = session("did:plc:someone", Some("did:plc:mod"));
    assert!(!is_service_account(Some(&s)));
}

#[test]
fn missing_config_identity_fails_to_hidden() {
    let s = session("did:plc:mod", None);
    assert!(!is_service_account(Some(&s)));
}

// =============================================================
// wire format
// =============================================================

#[test]
fn session_deserializes_with_missing_optional_fields() {
    let s: Session = serde_json::from_str(r#"{"did":"did:plc:mod"}"#).unwrap();
    assert_eq!(s.did, "did:plc:mod");
    assert!(s.handle.is_none());
    assert!(s.config.did.is_none());
}
