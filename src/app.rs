//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::shell::Shell;
use crate::pages::{configure::ConfigurePage, queue::QueuePage};
use crate::state::{menu::MenuState, session::SessionState, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components. The
    // mobile drawer flag is its own context value, scoped to this
    // component's lifetime.
    let session = RwSignal::new(SessionState::default());
    let menu = RwSignal::new(MenuState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(menu);
    provide_context(ui);

    // Apply the stored color scheme on mount.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    // Resolve the current session once; everything consuming it treats
    // "absent" as signed out.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            session.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                let current = crate::net::api::fetch_session().await;
                session.set(SessionState {
                    session: current,
                    loading: false,
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/modqueue-ui.css"/>
        <Title text="Modqueue"/>

        <Router>
            <Shell>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=QueuePage/>
                    <Route path=StaticSegment("configure") view=ConfigurePage/>
                </Routes>
            </Shell>
        </Router>
    }
}
