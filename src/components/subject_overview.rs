//! Compact subject descriptor cell.

use leptos::prelude::*;

/// Renders the subject with its repo handle when one is known. The wide
/// table layout truncates long record URIs; the narrow layout asks for
/// the full text since it owns the whole row.
#[component]
pub fn SubjectOverview(
    subject: String,
    subject_repo_handle: Option<String>,
    #[prop(default = true)] with_truncation: bool,
) -> impl IntoView {
    let descriptor_class = if with_truncation {
        "subject-overview__subject subject-overview__subject--truncated"
    } else {
        "subject-overview__subject"
    };

    let subject_title = subject.clone();

    view! {
        <span class="subject-overview">
            {subject_repo_handle
                .map(|handle| view! { <span class="subject-overview__handle">{format!("@{handle}")}</span> })}
            <span class=descriptor_class title=subject_title>
                {subject}
            </span>
        </span>
    }
}
