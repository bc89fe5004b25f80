use super::*;

#[test]
fn placeholder_gets_height_and_rounded_corners() {
    assert_eq!(SKELETON_STYLE, [("min-height", "20px"), ("border-radius", "8px")]);
}

#[test]
fn class_is_not_the_selector() {
    assert_ne!(format!(".{SKELETON_CLASS}"), SKELETON_SELECTOR);
}
