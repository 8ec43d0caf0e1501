//! Shared reactive state, provided as `RwSignal` contexts from the app root.

pub mod chat;
pub mod import;
pub mod ui;
