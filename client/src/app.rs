//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::pages::chat_agent::ChatAgentPage;
use crate::pages::import_articles::ImportArticlesPage;
use crate::pages::introduction::IntroductionPage;
use crate::pages::network_graph::NetworkGraphPage;
use crate::state::chat::ChatState;
use crate::state::import::ImportState;
use crate::state::ui::UiState;
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
/// Provides shared state contexts and maps the four static paths to their
/// pages under the sidebar layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let import = RwSignal::new(ImportState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(ui);
    provide_context(import);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/careergraph.css"/>
        <Title text="CareerGraph"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=BaseLayout>
                    <Route path=StaticSegment("") view=IntroductionPage/>
                    <Route path=StaticSegment("import-articles") view=ImportArticlesPage/>
                    <Route path=StaticSegment("fetch-network") view=NetworkGraphPage/>
                    <Route path=StaticSegment("chat-agent") view=ChatAgentPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Sidebar + content layout shared by every page.
#[component]
fn BaseLayout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Apply the persisted color-scheme preference once on mount.
    Effect::new(move || {
        let dark = dark_mode::init();
        ui.update(|s| s.dark_mode = dark);
    });

    view! {
        <div class="layout">
            <Sidebar/>
            <main class="layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
