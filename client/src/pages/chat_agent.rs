//! Chat Agent page with the transcript, retrieval-mode selector, and input row.
//!
//! One request is in flight at a time; the send button and input disable
//! while waiting. A failed turn renders as an error row and is excluded
//! from the history sent with later questions.

#[cfg(test)]
#[path = "chat_agent_test.rs"]
mod chat_agent_test;

use leptos::prelude::*;

use profiles::{ChatMode, ChatRequest};

use crate::net::api;
use crate::state::chat::{ChatRole, ChatState};

const CHAT_ERROR_MESSAGE: &str = "Failed to get a response.";

/// Parse the `<select>` value back into a mode, defaulting to basic search.
fn mode_from_value(value: &str) -> ChatMode {
    if value == ChatMode::BasicHybridSearchNodeNeighborhood.as_str() {
        ChatMode::BasicHybridSearchNodeNeighborhood
    } else {
        ChatMode::BasicHybridSearch
    }
}

#[component]
pub fn ChatAgentPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());

    let do_send = move || {
        let question = input.get();
        let question = question.trim().to_owned();
        if question.is_empty() || chat.get().pending {
            return;
        }

        let state = chat.get();
        let request =
            ChatRequest { question: question.clone(), mode: state.mode, history: state.history() };
        chat.update(|s| {
            s.push_user(question);
            s.pending = true;
        });
        input.set(String::new());

        leptos::task::spawn_local(async move {
            match api::send_chat(&request).await {
                Ok(reply) => chat.update(|s| {
                    s.push_assistant(reply.answer);
                    s.pending = false;
                }),
                Err(_) => chat.update(|s| {
                    s.push_failure(CHAT_ERROR_MESSAGE);
                    s.pending = false;
                }),
            }
        });
    };

    let on_send_click = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_mode_change = move |ev: leptos::ev::Event| {
        let mode = mode_from_value(&event_target_value(&ev));
        chat.update(|s| s.mode = mode);
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().pending;

    view! {
        <div class="page">
            <div class="card card--wide chat">
                <h2 class="card__title">"Chat Agent"</h2>

                <div class="chat__toolbar">
                    <label class="chat__mode-label" for="chat-mode">"Retrieval mode"</label>
                    <select id="chat-mode" class="chat__mode" on:change=on_mode_change>
                        <option
                            value=ChatMode::BasicHybridSearch.as_str()
                            selected=move || chat.get().mode == ChatMode::BasicHybridSearch
                        >
                            "Hybrid search"
                        </option>
                        <option
                            value=ChatMode::BasicHybridSearchNodeNeighborhood.as_str()
                            selected=move || {
                                chat.get().mode == ChatMode::BasicHybridSearchNodeNeighborhood
                            }
                        >
                            "Hybrid search + node neighborhood"
                        </option>
                    </select>
                </div>

                <div class="chat__messages">
                    {move || {
                        let messages = chat.get().messages;
                        if messages.is_empty() {
                            return view! {
                                <div class="chat__empty">"Ask a question about the job profiles."</div>
                            }
                                .into_any();
                        }
                        messages
                            .iter()
                            .map(|message| {
                                let class = match message.role {
                                    ChatRole::User => "chat__message chat__message--user",
                                    ChatRole::Assistant => "chat__message chat__message--assistant",
                                    ChatRole::Failure => "chat__message chat__message--error",
                                };
                                let text = message.text.clone();
                                view! { <div class=class>{text}</div> }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>

                <div class="chat__input-row">
                    <input
                        class="chat__input"
                        type="text"
                        placeholder="Ask about roles, salaries, employers..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        disabled=move || chat.get().pending
                    />
                    <button
                        class="button button--primary"
                        on:click=on_send_click
                        disabled=move || !can_send()
                    >
                        {move || if chat.get().pending { "Thinking..." } else { "Send" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
