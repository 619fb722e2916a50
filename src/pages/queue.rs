//! Moderation queue page: fetches subject statuses per the URL term and
//! sort parameters and feeds them to the table.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_router::params::ParamsMap;

use crate::components::subject_table::SubjectTable;
use crate::net::api::QueueRequest;
use crate::state::sort::{SORT_DIRECTION_KEY, SORT_FIELD_KEY, SortDirection};
use crate::state::subjects::SubjectListState;

/// Queue page. Owns the fetched sequence and pagination; the table only
/// renders what it is handed, pre-sorted by the backend.
#[component]
pub fn QueuePage() -> impl IntoView {
    let location = use_location();
    let query = location.query;
    let list = RwSignal::new(SubjectListState::default());

    // Reload the first page whenever the term or sort parameters change.
    Effect::new(move || {
        let request = request_from(&query.get());
        list.update(SubjectListState::begin_reload);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_subject_statuses(&request).await {
                    Some(page) => list.update(|l| l.apply_page(page)),
                    None => list.update(SubjectListState::finish_without_page),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    // Fetch the next page and append it, keeping existing row order.
    let on_load_more = Callback::new(move |()| {
        let Some(cursor) = list.with_untracked(|l| l.cursor.clone()) else {
            return;
        };
        if list.with_untracked(|l| l.load_pending) {
            return;
        }
        list.update(|l| l.load_pending = true);
        #[cfg(feature = "hydrate")]
        {
            let request = QueueRequest {
                cursor: Some(cursor),
                ..request_from(&query.get_untracked())
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_subject_statuses(&request).await {
                    Some(page) => list.update(|l| l.apply_more(page)),
                    None => list.update(SubjectListState::finish_without_page),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cursor;
        }
    });

    view! {
        <section class="queue-page">
            <h1 class="queue-page__heading">"Moderation Queue"</h1>
            <SubjectTable
                subjects=Signal::derive(move || list.with(|l| l.items.clone()))
                show_load_more=Signal::derive(move || list.with(SubjectListState::show_load_more))
                is_initial_loading=Signal::derive(move || list.with(|l| l.initial_loading))
                on_load_more=on_load_more
            />
        </section>
    }
}

/// First-page request for the current URL parameters.
fn request_from(query: &ParamsMap) -> QueueRequest {
    QueueRequest {
        term: query.get("term").filter(|t| !t.is_empty()),
        sort_field: query.get(SORT_FIELD_KEY),
        sort_direction: query
            .get(SORT_DIRECTION_KEY)
            .as_deref()
            .and_then(SortDirection::parse),
        cursor: None,
    }
}
