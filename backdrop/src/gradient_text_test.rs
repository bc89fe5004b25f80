use super::*;

#[test]
fn animation_runs_the_injected_keyframes() {
    assert!(GRADIENT_ANIMATION.starts_with(GRADIENT_KEYFRAMES));
    assert!(GRADIENT_CSS.contains(&format!("@keyframes {GRADIENT_KEYFRAMES}")));
}

#[test]
fn stylesheet_targets_the_selector() {
    assert!(GRADIENT_CSS.contains(&format!("{GRADIENT_SELECTOR} {{")));
    assert!(GRADIENT_CSS.contains("background-clip: text"));
}

#[test]
fn loop_returns_to_start() {
    assert!(GRADIENT_CSS.contains("0%, 100% { background-position: 0% 50%; }"));
}
