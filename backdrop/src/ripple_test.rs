#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn ripple_uses_longer_side() {
    let b = ripple_box(Point::new(0.0, 0.0), 120.0, 40.0, Point::new(60.0, 20.0));
    assert_eq!(b.size, 120.0);
    let tall = ripple_box(Point::new(0.0, 0.0), 30.0, 90.0, Point::new(0.0, 0.0));
    assert_eq!(tall.size, 90.0);
}

#[test]
fn ripple_is_centred_on_click() {
    let b = ripple_box(Point::new(100.0, 50.0), 120.0, 40.0, Point::new(160.0, 70.0));
    assert_eq!(b.left, 0.0);
    assert_eq!(b.top, -40.0);
    assert_eq!(b.left + b.size / 2.0, 60.0);
    assert_eq!(b.top + b.size / 2.0, 20.0);
}

#[test]
fn click_at_corner_offsets_by_half_size() {
    let b = ripple_box(Point::new(10.0, 10.0), 50.0, 50.0, Point::new(10.0, 10.0));
    assert_eq!((b.left, b.top), (-25.0, -25.0));
}
