//! Top-level page chrome: fixed sidebar, header with search and profile
//! menu, mobile drawer, and the content region.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::mobile_menu::{MobileMenu, MobileMenuBtn};
use crate::components::profile_menu::ProfileMenu;
use crate::components::sidebar_nav::SidebarNav;
use crate::util::query;

/// Persistent layout wrapped around every page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            // Fixed sidebar, hidden on narrow viewports by CSS.
            <div class="shell__sidebar">
                <div class="shell__logo">"Modqueue"</div>
                <SidebarNav/>
            </div>

            <MobileMenu/>

            <div class="shell__content">
                <header class="shell__header">
                    <MobileMenuBtn/>
                    <form class="shell__search" action="#" method="GET">
                        <svg class="shell__search-icon" viewBox="0 0 20 20" aria-hidden="true">
                            <circle cx="9" cy="9" r="6" fill="none"></circle>
                            <line x1="13" y1="13" x2="18" y2="18"></line>
                        </svg>
                        <SearchInput/>
                    </form>
                    <div class="shell__profile">
                        <ProfileMenu/>
                    </div>
                </header>

                <main class="shell__main">{children()}</main>
            </div>
        </div>
    }
}

/// Free-text search box mirrored with the URL `term` parameter.
///
/// The local buffer echoes every keystroke immediately; the URL is
/// updated with a replace navigation so report filtering follows without
/// flooding the history stack.
#[component]
fn SearchInput() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let term_input = RwSignal::new(String::new());

    // Mirror the URL term back into the buffer when navigation changes
    // it from outside (back/forward, sort links carrying the term).
    {
        let query = location.query;
        Effect::new(move || {
            let term = query.with(|q| q.get("term").unwrap_or_default());
            term_input.set(term);
        });
    }

    let pathname = location.pathname;
    let search = location.search;

    view! {
        <input
            id="term"
            name="term"
            class="shell__search-input"
            type="search"
            placeholder="Search"
            aria-label="Search"
            prop:value=move || term_input.get()
            on:input=move |ev| {
                let value = event_target_value(&ev);
                term_input.set(value.clone());
                let href = query::with_param(
                    &pathname.get_untracked(),
                    &search.get_untracked(),
                    "term",
                    &value,
                );
                navigate(
                    &href,
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                );
            }
        />
    }
}
