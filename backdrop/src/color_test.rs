#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn parses_rgba_function() {
    let c: Rgba = "rgba(123, 92, 255, 0.6)".parse().expect("valid rgba");
    assert_eq!((c.r, c.g, c.b), (123, 92, 255));
    assert_eq!(c.a, 0.6);
}

#[test]
fn parses_rgba_without_spaces_and_any_case() {
    let c: Rgba = "RGBA(1,2,3,0)".parse().expect("valid rgba");
    assert_eq!((c.r, c.g, c.b, c.a), (1, 2, 3, 0.0));
}

#[test]
fn parses_rgb_as_opaque() {
    let c: Rgba = "rgb(10, 20, 30)".parse().expect("valid rgb");
    assert_eq!((c.r, c.g, c.b), (10, 20, 30));
    assert_eq!(c.a, 1.0);
}

#[test]
fn parses_long_and_short_hex() {
    let long: Rgba = "#7b5cff".parse().expect("valid hex");
    assert_eq!((long.r, long.g, long.b, long.a), (0x7b, 0x5c, 0xff, 1.0));
    let short: Rgba = "#fa0".parse().expect("valid short hex");
    assert_eq!((short.r, short.g, short.b), (0xff, 0xaa, 0x00));
}

#[test]
fn rejects_garbage() {
    for raw in ["", "violet", "#12345", "#ggg", "rgba(1, 2, 3)", "rgb(1, 2, 3, 0.5)", "rgba(1, 2, 3, 1.5)", "rgb(300, 0, 0)", "rgb(a, b, c)", "hsl(1, 2%, 3%)"] {
        let err = raw.parse::<Rgba>().expect_err(raw);
        assert_eq!(err, ParseColorError(raw.to_owned()));
    }
}

#[test]
fn with_alpha_replaces_only_alpha() {
    let c = Rgba::new(123, 92, 255, 0.6).with_alpha(0.25);
    assert_eq!((c.r, c.g, c.b), (123, 92, 255));
    assert_eq!(c.a, 0.25);
}

#[test]
fn with_alpha_clamps_into_unit_range() {
    let c = Rgba::new(0, 0, 0, 1.0);
    assert_eq!(c.with_alpha(-0.5).a, 0.0);
    assert_eq!(c.with_alpha(3.0).a, 1.0);
}

#[test]
fn display_is_css_rgba() {
    let c = Rgba::new(123, 92, 255, 0.2);
    assert_eq!(c.to_string(), "rgba(123, 92, 255, 0.2)");
    assert_eq!(c.with_alpha(1.0).to_string(), "rgba(123, 92, 255, 1)");
}

#[test]
fn display_round_trips_through_parse() {
    let c = Rgba::new(33, 212, 253, 0.3);
    let back: Rgba = c.to_string().parse().expect("own output parses");
    assert_eq!(back, c);
}
