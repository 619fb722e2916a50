//! Pagination trigger rendered below tables.

use leptos::prelude::*;

/// Button invoking the caller's load-more callback. Pagination state
/// itself lives with the caller; this is only the trigger.
#[component]
pub fn LoadMoreButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <button class="btn load-more" on:click=move |_| on_click.run(())>
            "Load more"
        </button>
    }
}
