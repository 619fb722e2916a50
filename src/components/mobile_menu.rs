//! Mobile navigation drawer and its trigger button.
//!
//! The open flag lives in a context-provided `RwSignal<MenuState>` shared
//! between the header trigger and the overlay. Closing happens from the
//! close button, a backdrop click, or selecting any item; action items
//! close the drawer synchronously before their handler runs.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icons::NavIcon;
use crate::state::menu::MenuState;
use crate::state::nav::{NavAction, NavItem, NavTarget, is_current, visible_items};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Header button that opens the drawer. Hidden on wide viewports by CSS.
#[component]
pub fn MobileMenuBtn() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    view! {
        <button
            type="button"
            class="mobile-menu-btn"
            on:click=move |_| menu.update(MenuState::open)
        >
            <span class="sr-only">"Open sidebar"</span>
            <svg class="mobile-menu-btn__icon" viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="6" x2="17" y2="6"></line>
                <line x1="3" y1="10" x2="17" y2="10"></line>
                <line x1="3" y1="14" x2="11" y2="14"></line>
            </svg>
        </button>
    }
}

/// Overlay drawer duplicating the primary navigation for narrow viewports.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let close = move |_| menu.update(MenuState::close);

    // Close first, synchronously, then run the handler.
    let dispatch = Callback::new(move |action: NavAction| {
        menu.update(MenuState::close);
        match action {
            NavAction::ToggleTheme => {
                ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
            }
        }
    });

    view! {
        <Show when=move || menu.get().is_open()>
            <div class="mobile-menu" on:click=close>
                <div class="mobile-menu__panel" on:click=move |ev| ev.stop_propagation()>
                    <button type="button" class="mobile-menu__close" on:click=close>
                        <span class="sr-only">"Close sidebar"</span>
                        <svg class="mobile-menu__close-icon" viewBox="0 0 20 20" aria-hidden="true">
                            <line x1="5" y1="5" x2="15" y2="15"></line>
                            <line x1="15" y1="5" x2="5" y2="15"></line>
                        </svg>
                    </button>
                    <div class="mobile-menu__logo">"Modqueue"</div>
                    <nav class="mobile-menu__nav">
                        {move || {
                            let pathname = location.pathname.get();
                            session
                                .with(|s| visible_items(s.session.as_ref()))
                                .into_iter()
                                .map(|item| {
                                    let current = is_current(&pathname, &item);
                                    view! { <MenuItem item=item current=current dispatch=dispatch/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </nav>
                </div>
            </div>
        </Show>
    }
}

/// One drawer entry: a route link or an action button.
#[component]
fn MenuItem(item: NavItem, current: bool, dispatch: Callback<NavAction>) -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    let class = if current {
        "mobile-menu__item mobile-menu__item--current"
    } else {
        "mobile-menu__item"
    };

    match item.target {
        NavTarget::Href(href) => view! {
            <a class=class href=href on:click=move |_| menu.update(MenuState::close)>
                <NavIcon icon=item.icon/>
                <span>{item.name}</span>
            </a>
        }
        .into_any(),
        NavTarget::Action(action) => view! {
            <button type="button" class=class on:click=move |_| dispatch.run(action)>
                <NavIcon icon=item.icon/>
                <span>{item.name}</span>
            </button>
        }
        .into_any(),
    }
}
