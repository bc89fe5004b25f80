#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(b.distance_to(a), 5.0);
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(12.5, -7.0);
    assert_eq!(p.distance_to(p), 0.0);
}

#[test]
fn size_contains_interior_and_edges() {
    let s = Size::new(100.0, 50.0);
    assert!(s.contains(Point::new(50.0, 25.0)));
    assert!(s.contains(Point::new(0.0, 0.0)));
    assert!(s.contains(Point::new(100.0, 50.0)));
}

#[test]
fn size_excludes_outside_points() {
    let s = Size::new(100.0, 50.0);
    assert!(!s.contains(Point::new(-0.1, 25.0)));
    assert!(!s.contains(Point::new(50.0, 50.1)));
    assert!(!s.contains(Point::new(f64::NAN, 1.0)));
}

#[test]
fn size_default_is_empty() {
    let s = Size::default();
    assert_eq!(s.width, 0.0);
    assert_eq!(s.height, 0.0);
    assert!(s.contains(Point::new(0.0, 0.0)));
}

#[test]
fn pixel_extent_truncates_fractions() {
    assert_eq!(pixel_extent(640.9), 640);
    assert_eq!(pixel_extent(1.0), 1);
}

#[test]
fn pixel_extent_rejects_negative_and_non_finite() {
    assert_eq!(pixel_extent(-5.0), 0);
    assert_eq!(pixel_extent(f64::NAN), 0);
    assert_eq!(pixel_extent(f64::INFINITY), 0);
}
