//! Status icon derived from a subject's review state.

use leptos::prelude::*;

use crate::net::types::ReviewState;

/// Icon for a review state. The classification fully determines the
/// glyph and color; callers only pick a size class per layout.
#[component]
pub fn ReviewStateIcon(
    state: ReviewState,
    #[prop(default = "review-state-icon--md")] size: &'static str,
) -> impl IntoView {
    let (modifier, label) = match state {
        ReviewState::Open => ("review-state-icon--open", "Awaiting review"),
        ReviewState::Escalated => ("review-state-icon--escalated", "Escalated"),
        ReviewState::Resolved => ("review-state-icon--resolved", "Resolved"),
    };

    view! {
        <svg
            class=format!("review-state-icon {modifier} {size}")
            viewBox="0 0 20 20"
            aria-hidden="true"
        >
            <title>{label}</title>
            {match state {
                ReviewState::Open => view! { <circle cx="10" cy="10" r="6"></circle> }.into_any(),
                ReviewState::Escalated => {
                    view! { <path d="M10 3 L17 17 L3 17 Z"></path> }.into_any()
                }
                ReviewState::Resolved => view! {
                    <circle cx="10" cy="10" r="8" fill="none"></circle>
                    <path d="M6 10 L9 13 L14 7" fill="none"></path>
                }
                    .into_any(),
            }}
        </svg>
    }
}
