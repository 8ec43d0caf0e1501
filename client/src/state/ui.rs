//! Global UI chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// App-wide presentation state. Domain state (import form, chat) lives in
/// its own modules so pages stay independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
