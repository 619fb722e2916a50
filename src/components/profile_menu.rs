//! Profile dropdown in the shell header.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Shows the signed-in identity and a sign-out action. With no session
/// it renders a plain "Account" trigger with an empty dropdown.
#[component]
pub fn ProfileMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let open = RwSignal::new(false);

    let display_name = move || {
        session.with(|s| {
            s.session
                .as_ref()
                .map(|sess| sess.handle.clone().unwrap_or_else(|| sess.did.clone()))
        })
    };

    let sign_out = move |_| {
        open.set(false);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                session.set(SessionState::default());
            });
        }
    };

    view! {
        <div class="profile-menu">
            <button
                type="button"
                class="profile-menu__trigger"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="profile-menu__avatar" aria-hidden="true"></span>
                <span class="sr-only">"Open profile menu"</span>
            </button>
            <Show when=move || open.get()>
                <div class="profile-menu__dropdown">
                    <span class="profile-menu__identity">
                        {move || display_name().unwrap_or_else(|| "Account".to_owned())}
                    </span>
                    <Show when=move || session.with(|s| s.session.is_some())>
                        <button type="button" class="profile-menu__item" on:click=sign_out>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
