//! Service configuration page, reachable only through the
//! service-account-only navigation item.

use leptos::prelude::*;

use crate::state::session::{SessionState, is_service_account};

/// Configuration page stub. The backing forms live server-side; this
/// view only confirms the privileged identity.
#[component]
pub fn ConfigurePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let service_account = move || session.with(|s| is_service_account(s.session.as_ref()));

    view! {
        <section class="configure-page">
            <h1 class="configure-page__heading">"Configure"</h1>
            <Show
                when=service_account
                fallback=|| {
                    view! {
                        <p class="configure-page__notice">
                            "Only the service account can change service settings."
                        </p>
                    }
                }
            >
                <p class="configure-page__notice">
                    "Signed in as the service account. Service settings are managed "
                    "through the backend configuration endpoints."
                </p>
            </Show>
        </section>
    }
}
