//! Import Articles page hosting the one-shot import trigger.
//!
//! The submit button is the only double-submit guard: it renders in a
//! loading/disabled state while a request is outstanding. Success replaces
//! the form with a dismissible confirmation; failure shows a dismissible
//! error above the button and leaves the form usable.

use leptos::prelude::*;

use crate::components::notification::{Notification, NotificationKind};
use crate::net::api;
use crate::state::import::ImportState;

#[component]
pub fn ImportArticlesPage() -> impl IntoView {
    let import = expect_context::<RwSignal<ImportState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = {
            let mut started = false;
            import.update(|s| started = s.begin());
            started
        };
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::import_articles().await {
                Ok(_count) => import.update(ImportState::succeed),
                Err(_) => import.update(ImportState::fail),
            }
        });
    };

    let on_dismiss = Callback::new(move |()| import.update(ImportState::dismiss));

    let success_message = move || import.get().success_message;
    let error_message = move || import.get().error_message;
    let pending = move || import.get().pending;

    view! {
        <div class="page">
            <div class="card">
                <h2 class="card__title">"Knowledge Graph Construction"</h2>
                <div class="alert alert--info">
                    "The database import transfers job-profile data from the MongoDB \
                     export into Neo4j. It not only writes the records to the graph but \
                     also constructs a knowledge graph designed for Retrieval-Augmented \
                     Generation, enabling advanced analytics and relationship mapping."
                </div>

                <Show
                    when=move || success_message().is_none()
                    fallback=move || {
                        view! {
                            <Notification
                                kind=NotificationKind::Success
                                message=success_message().unwrap_or_default()
                                on_close=on_dismiss
                            />
                        }
                    }
                >
                    <form on:submit=on_submit>
                        <Show when=move || error_message().is_some()>
                            <Notification
                                kind=NotificationKind::Error
                                message=error_message().unwrap_or_default()
                                on_close=on_dismiss
                            />
                        </Show>
                        <div class="card__actions">
                            <button
                                type="submit"
                                class="button button--primary"
                                class:button--loading=pending
                                disabled=pending
                            >
                                {move || if pending() { "Importing..." } else { "Import" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}
