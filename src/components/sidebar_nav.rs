//! Desktop sidebar navigation.
//!
//! Renders the same item list as the mobile drawer; the drawer's
//! open/close choreography does not apply here.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icons::NavIcon;
use crate::state::nav::{NavAction, NavItem, NavTarget, is_current, visible_items};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Vertical nav list inside the fixed sidebar.
#[component]
pub fn SidebarNav() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let dispatch = Callback::new(move |action: NavAction| match action {
        NavAction::ToggleTheme => {
            ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
        }
    });

    view! {
        <nav class="sidebar-nav">
            {move || {
                let pathname = location.pathname.get();
                session
                    .with(|s| visible_items(s.session.as_ref()))
                    .into_iter()
                    .map(|item| {
                        let current = is_current(&pathname, &item);
                        view! { <SidebarItem item=item current=current dispatch=dispatch/> }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}

/// One sidebar entry: a route link or an action button.
#[component]
fn SidebarItem(item: NavItem, current: bool, dispatch: Callback<NavAction>) -> impl IntoView {
    let class = if current {
        "sidebar-nav__item sidebar-nav__item--current"
    } else {
        "sidebar-nav__item"
    };

    match item.target {
        NavTarget::Href(href) => view! {
            <a class=class href=href>
                <NavIcon icon=item.icon/>
                <span class="sidebar-nav__label">{item.name}</span>
            </a>
        }
        .into_any(),
        NavTarget::Action(action) => view! {
            <button type="button" class=class on:click=move |_| dispatch.run(action)>
                <NavIcon icon=item.icon/>
                <span class="sidebar-nav__label">{item.name}</span>
            </button>
        }
        .into_any(),
    }
}
