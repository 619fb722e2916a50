//! Indeterminate loading spinner.

use leptos::prelude::*;

/// Spinner shown while a fetch is in flight.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loader" role="status">
            <span class="loader__spinner"></span>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}
