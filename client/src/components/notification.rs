//! Dismissible success/error notification.

use leptos::prelude::*;

/// Visual flavor of a [`Notification`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification--success",
            Self::Error => "notification notification--error",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Success => "Done!",
            Self::Error => "Error!",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
        }
    }
}

/// A bordered notification with a close button.
#[component]
pub fn Notification(
    kind: NotificationKind,
    message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=kind.class() role="alert">
            <span class="notification__icon" aria-hidden="true">{kind.glyph()}</span>
            <div class="notification__body">
                <div class="notification__title">{kind.title()}</div>
                <div class="notification__message">{message}</div>
            </div>
            <button
                class="notification__close"
                on:click=move |_| on_close.run(())
                aria-label="Dismiss"
            >
                "✕"
            </button>
        </div>
    }
}
