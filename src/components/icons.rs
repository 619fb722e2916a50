//! Inline SVG glyphs for navigation items.
//!
//! Icon artwork is not this crate's concern; these are minimal stand-ins
//! keyed by the `icon` field of a nav item descriptor.

use leptos::prelude::*;

/// Glyph for a navigation item, selected by icon key. Unknown keys render
/// an empty box rather than failing.
#[component]
pub fn NavIcon(icon: &'static str) -> impl IntoView {
    view! {
        <svg class="nav-icon" viewBox="0 0 20 20" aria-hidden="true">
            {match icon {
                "queue" => view! {
                    <line x1="4" y1="6" x2="16" y2="6"></line>
                    <line x1="4" y1="10" x2="16" y2="10"></line>
                    <line x1="4" y1="14" x2="12" y2="14"></line>
                }
                    .into_any(),
                "settings" => view! {
                    <circle cx="10" cy="10" r="3"></circle>
                    <circle cx="10" cy="10" r="7" fill="none"></circle>
                }
                    .into_any(),
                "theme" => view! {
                    <circle cx="10" cy="10" r="5"></circle>
                    <path d="M10 10 A 5 5 0 0 1 10 5 Z"></path>
                }
                    .into_any(),
                _ => view! { <rect x="5" y="5" width="10" height="10"></rect> }.into_any(),
            }}
        </svg>
    }
}
