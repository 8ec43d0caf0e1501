//! Sidebar navigation.
//!
//! A fixed, ordered list of route/label/icon triples rendered as links,
//! with the link matching the current route highlighted and a color-scheme
//! toggle at the bottom.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// One navigation entry.
#[derive(Clone, Copy)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The main menu, in display order.
pub const MAIN_MENU_LINKS: [NavLink; 4] = [
    NavLink { path: "/", label: "Introduction", icon: "💡" },
    NavLink { path: "/import-articles/", label: "Import Database", icon: "🗂" },
    NavLink { path: "/fetch-network/", label: "Fetch Network", icon: "🕸" },
    NavLink { path: "/chat-agent/", label: "Chat agent", icon: "💬" },
];

/// `true` when `link` addresses the currently displayed route. Trailing
/// slashes are insignificant; the root link only matches the root.
#[must_use]
pub fn is_active(current: &str, link: &str) -> bool {
    normalize(current) == normalize(link)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Sidebar with the main menu and the color-scheme toggle.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    // Memo is Copy, so each link's class closure can capture it.
    let pathname = use_location().pathname;

    let links = MAIN_MENU_LINKS
        .iter()
        .map(|link| {
            let link = *link;
            let class = move || {
                if is_active(&pathname.get(), link.path) {
                    "sidebar__link sidebar__link--active"
                } else {
                    "sidebar__link"
                }
            };
            view! {
                <a class=class href=link.path>
                    <span class="sidebar__link-icon" aria-hidden="true">{link.icon}</span>
                    <span>{link.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    let on_toggle_theme = move |_| {
        ui.update(|s| s.dark_mode = dark_mode::toggle(s.dark_mode));
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"CareerGraph"</div>
            <div class="sidebar__links">{links}</div>
            <div class="sidebar__toolbox">
                <button
                    class="sidebar__theme-toggle"
                    on:click=on_toggle_theme
                    title="Toggle color scheme"
                    aria-label="Toggle color scheme"
                >
                    "◐"
                </button>
            </div>
        </nav>
    }
}
