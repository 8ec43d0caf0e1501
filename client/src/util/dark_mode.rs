//! Color-scheme preference handling.
//!
//! The preference lives in `localStorage` and is reflected as a
//! `.dark-mode` class on `<html>` so the stylesheet can theme both schemes.
//! Outside a browser (SSR, tests) everything is a no-op defaulting to light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "careergraph_dark";

/// Resolve the stored preference (falling back to the system scheme),
/// apply it to the document, and return it.
pub fn init() -> bool {
    let dark = stored_preference();
    apply(dark);
    dark
}

/// Flip the scheme, persist the choice, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    store_preference(next);
    next
}

fn stored_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                return value == "true";
            }
        }
        // No stored choice: follow the system scheme.
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

fn store_preference(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if dark { "true" } else { "false" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            let _ = if dark { class_list.add_1("dark-mode") } else { class_list.remove_1("dark-mode") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}
