//! Import form state: idle → pending → success | error → idle.
//!
//! INVARIANT
//! =========
//! At most one of the success/error messages is set at a time. Every
//! transition goes through the methods below, which clear both messages
//! before setting one.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

pub const IMPORT_SUCCESS_MESSAGE: &str = "Successfully imported articles!";
pub const IMPORT_ERROR_MESSAGE: &str = "Failed to import articles.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportState {
    pub pending: bool,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl ImportState {
    /// Start a submission. Returns `false` (and changes nothing) while a
    /// request is already outstanding; this is the only double-submit guard.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.success_message = None;
        self.error_message = None;
        self.pending = true;
        true
    }

    pub fn succeed(&mut self) {
        self.pending = false;
        self.success_message = Some(IMPORT_SUCCESS_MESSAGE.to_owned());
        self.error_message = None;
    }

    pub fn fail(&mut self) {
        self.pending = false;
        self.success_message = None;
        self.error_message = Some(IMPORT_ERROR_MESSAGE.to_owned());
    }

    /// Dismiss either notification, returning the form to idle.
    pub fn dismiss(&mut self) {
        self.success_message = None;
        self.error_message = None;
    }
}
