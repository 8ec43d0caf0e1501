use super::*;

#[test]
fn default_scheme_is_light() {
    assert!(!UiState::default().dark_mode);
}
