#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// The authenticated moderation session, as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    /// Identity of the signed-in account.
    pub did: String,
    /// Human-readable handle, when the backend resolved one.
    #[serde(default)]
    pub handle: Option<String>,
    /// Service configuration attached to the session.
    #[serde(default)]
    pub config: SessionConfig,
}

/// Configuration block carried on the session.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionConfig {
    /// Identity of the privileged service account, when configured.
    #[serde(default)]
    pub did: Option<String>,
}

/// Session state tracking the current session and loading status.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

/// Whether the current session belongs to the privileged service account.
///
/// Only authorization-like check in this crate: a plain equality test
/// between the session identity and the configured service-account
/// identity. Absent session or absent config identity answers `false`,
/// so flagged navigation items stay hidden rather than erroring.
pub fn is_service_account(session: Option<&Session>) -> bool {
    session.is_some_and(|s| s.config.did.as_deref() == Some(s.did.as_str()))
}
