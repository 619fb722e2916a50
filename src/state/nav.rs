#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::session::{Session, is_service_account};

/// What activating a navigation item does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Navigate to an in-app route.
    Href(&'static str),
    /// Run a handler; the mobile drawer closes before it fires.
    Action(NavAction),
}

/// Handlers a nav item can invoke. Dispatch lives in the components so the
/// descriptor list stays a plain value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    ToggleTheme,
}

/// One entry of the primary navigation, shared between the desktop sidebar
/// and the mobile drawer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub target: NavTarget,
    /// Hidden unless the session belongs to the service account.
    pub service_account_only: bool,
}

/// The primary navigation, in display order.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            name: "Queue",
            icon: "queue",
            target: NavTarget::Href("/"),
            service_account_only: false,
        },
        NavItem {
            name: "Configure",
            icon: "settings",
            target: NavTarget::Href("/configure"),
            service_account_only: true,
        },
        NavItem {
            name: "Toggle Theme",
            icon: "theme",
            target: NavTarget::Action(NavAction::ToggleTheme),
            service_account_only: false,
        },
    ]
}

/// Filter the item list for the current session. Service-account-only
/// items disappear for everyone else, including when no session is
/// present at all.
pub fn visible_items(session: Option<&Session>) -> Vec<NavItem> {
    let service_account = is_service_account(session);
    nav_items()
        .into_iter()
        .filter(|item| !item.service_account_only || service_account)
        .collect()
}

/// Whether `item` points at the page currently shown.
pub fn is_current(pathname: &str, item: &NavItem) -> bool {
    match &item.target {
        NavTarget::Href(href) => {
            if *href == "/" {
                pathname == "/" || pathname.is_empty()
            } else {
                pathname == *href || pathname.starts_with(&format!("{href}/"))
            }
        }
        NavTarget::Action(_) => false,
    }
}
