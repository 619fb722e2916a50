#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};

/// Review-state classification driving the status icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewState {
    /// Awaiting review.
    #[default]
    Open,
    /// Escalated to a senior moderator.
    Escalated,
    /// Review complete.
    Resolved,
}

/// One moderation record, exactly as the backend reports it.
///
/// Owned and mutated by the backend; read-only here. Every timestamp is
/// independently optional and an absent one simply renders nothing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStatus {
    pub id: i64,
    /// Subject descriptor: an account DID or a record URI.
    pub subject: String,
    /// Resolved handle of the owning repo, when known.
    #[serde(default)]
    pub subject_repo_handle: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_reported_at: Option<DateTime<Utc>>,
    /// Moderator note attached at last review.
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub review_state: ReviewState,
}

/// One page of queue results.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStatusPage {
    #[serde(default)]
    pub subject_statuses: Vec<SubjectStatus>,
    /// Opaque pagination token; absent on the last page.
    #[serde(default)]
    pub cursor: Option<String>,
}
