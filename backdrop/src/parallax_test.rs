#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn centre_of_viewport_is_at_rest() {
    for index in 0..4 {
        assert_eq!(parallax_offset(index, Point::new(0.5, 0.5)), Point::new(0.0, 0.0));
    }
}

#[test]
fn first_element_spans_ten_pixels_each_way() {
    assert_eq!(parallax_offset(0, Point::new(0.0, 1.0)), Point::new(-5.0, 5.0));
}

#[test]
fn later_elements_move_further() {
    let corner = Point::new(1.0, 0.0);
    assert_eq!(parallax_offset(0, corner), Point::new(5.0, -5.0));
    assert_eq!(parallax_offset(1, corner), Point::new(10.0, -10.0));
    assert_eq!(parallax_offset(3, corner), Point::new(20.0, -20.0));
}

#[test]
fn fraction_is_relative_to_viewport() {
    let f = pointer_fraction(Point::new(200.0, 150.0), Size::new(800.0, 600.0));
    assert_eq!(f, Some(Point::new(0.25, 0.25)));
}

#[test]
fn empty_viewport_has_no_fraction() {
    assert_eq!(pointer_fraction(Point::new(1.0, 1.0), Size::new(0.0, 600.0)), None);
    assert_eq!(pointer_fraction(Point::new(1.0, 1.0), Size::default()), None);
}

#[test]
fn transform_is_a_pixel_translate() {
    assert_eq!(translate(Point::new(-2.5, 10.0)), "translate(-2.5px, 10px)");
}
