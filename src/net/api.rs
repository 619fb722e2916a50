//! REST API helpers for communicating with the moderation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so fetch failures
//! degrade to an empty queue or an anonymous session without crashing
//! hydration. Failures are logged, not propagated.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::session::Session;
use crate::state::sort::{SORT_DIRECTION_KEY, SORT_FIELD_KEY, SortDirection};
use crate::util::query;

use super::types::SubjectStatusPage;

/// Parameters for one queue page fetch, mirroring the URL state the page
/// was rendered from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueRequest {
    pub term: Option<String>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub cursor: Option<String>,
}

impl QueueRequest {
    /// Build the request query string (no leading `?`). Empty when no
    /// parameter is set.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();
        if let Some(term) = self.term.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("term".to_owned(), query::encode_value(term)));
        }
        if let Some(field) = &self.sort_field {
            pairs.push((SORT_FIELD_KEY.to_owned(), query::encode_value(field)));
        }
        if let Some(direction) = self.sort_direction {
            pairs.push((SORT_DIRECTION_KEY.to_owned(), direction.as_str().to_owned()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor".to_owned(), query::encode_value(cursor)));
        }
        query::build_raw(&pairs)
    }
}

/// Fetch one page of the moderation queue from `/api/subject-statuses`.
/// Returns `None` on failure or on the server.
pub async fn fetch_subject_statuses(request: &QueueRequest) -> Option<SubjectStatusPage> {
    #[cfg(feature = "hydrate")]
    {
        let query_string = request.to_query_string();
        let url = if query_string.is_empty() {
            "/api/subject-statuses".to_owned()
        } else {
            format!("/api/subject-statuses?{query_string}")
        };
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            log::warn!("subject-statuses fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<SubjectStatusPage>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        None
    }
}

/// Fetch the current session from `/api/session`.
/// Returns `None` if not signed in or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/session").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the current session by calling `POST /api/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/logout").send().await;
    }
}
