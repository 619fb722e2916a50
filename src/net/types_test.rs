use super::*;

const FULL: &str = r#"{
    "id": 7,
    "subject": "at://did:plc:abc/app.bsky.feed.post/3k2a",
    "subjectRepoHandle": "spammer.example.com",
    "createdAt": "2024-03-01T12:00:00Z",
    "lastReviewedAt": "2024-03-02T08:30:00Z",
    "lastReportedAt": "2024-03-03T10:15:00Z",
    "comment": "repeat offender",
    "reviewState": "escalated"
}"#;

#[test]
fn full_record_deserializes() {
    let s: SubjectStatus = serde_json::from_str(FULL).unwrap();
    assert_eq!(s.id, 7);
    assert_eq!(s.subject_repo_handle.as_deref(), Some("spammer.example.com"));
    assert_eq!(s.comment.as_deref(), Some("repeat offender"));
    assert_eq!(s.review_state, ReviewState::Escalated);
    assert!(s.created_at.is_some());
}

#[test]
fn missing_optional_fields_stay_none() {
    let s: SubjectStatus =
        serde_json::from_str(r#"{"id": 1, "subject": "did:plc:abc"}"#).unwrap();
    assert!(s.subject_repo_handle.is_none());
    assert!(s.created_at.is_none());
    assert!(s.last_reviewed_at.is_none());
    assert!(s.last_reported_at.is_none());
    assert!(s.comment.is_none());
    assert_eq!(s.review_state, ReviewState::Open);
}

#[test]
fn review_state_uses_camel_case_tokens() {
    let s: ReviewState = serde_json::from_str(r#""resolved""#).unwrap();
    assert_eq!(s, ReviewState::Resolved);
    assert_eq!(serde_json::to_string(&ReviewState::Open).unwrap(), r#""open""#);
}

#[test]
fn page_defaults_to_empty_without_cursor() {
    let p: SubjectStatusPage = serde_json::from_str("{}").unwrap();
    assert!(p.subject_statuses.is_empty());
    assert!(p.cursor.is_none());
}
