use super::*;

#[test]
fn toggle_flips_exactly_once_per_call() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn double_toggle_returns_to_the_starting_scheme() {
    let start = false;
    assert_eq!(toggle(toggle(start)), start);
}

#[test]
fn init_defaults_to_light_outside_a_browser() {
    assert!(!init());
}
