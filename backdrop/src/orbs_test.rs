#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn plan_produces_configured_count() {
    let config = OrbConfig { orb_count: 5, ..OrbConfig::default() };
    assert_eq!(plan(&mut rng(), &config, 0).len(), 5);
}

#[test]
fn plan_with_zero_orbs_is_empty() {
    let config = OrbConfig { orb_count: 0, ..OrbConfig::default() };
    assert!(plan(&mut rng(), &config, 0).is_empty());
}

#[test]
fn names_follow_serials() {
    let specs = plan(&mut rng(), &OrbConfig::default(), 7);
    let names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["float-orb-7", "float-orb-8", "float-orb-9"]);
}

#[test]
fn colors_cycle_through_palette() {
    let config = OrbConfig { orb_count: 5, ..OrbConfig::default() };
    let specs = plan(&mut rng(), &config, 0);
    assert_eq!(specs[0].color, config.colors[0]);
    assert_eq!(specs[2].color, config.colors[2]);
    assert_eq!(specs[3].color, config.colors[0]);
    assert_eq!(specs[4].color, config.colors[1]);
}

#[test]
fn randomized_values_stay_in_range() {
    let config = OrbConfig { orb_count: 200, ..OrbConfig::default() };
    for spec in plan(&mut rng(), &config, 0) {
        assert!((200.0..600.0).contains(&spec.diameter_px), "diameter {}", spec.diameter_px);
        assert!((15.0..25.0).contains(&spec.duration_s), "duration {}", spec.duration_s);
        assert!((0.0..100.0).contains(&spec.left_pct));
        assert!((0.0..100.0).contains(&spec.top_pct));
        for w in spec.waypoints {
            assert!((-100.0..100.0).contains(&w.dx), "dx {}", w.dx);
            assert!((-100.0..100.0).contains(&w.dy), "dy {}", w.dy);
        }
    }
}

#[test]
fn waypoints_use_fixed_stops_and_scales() {
    let spec = OrbSpec::generate(&mut rng(), 0, 0, &OrbConfig::default().colors);
    let stops: Vec<_> = spec.waypoints.iter().map(|w| (w.at, w.scale)).collect();
    assert_eq!(stops, [(25, 1.1), (50, 0.9), (75, 1.05)]);
}

#[test]
fn same_seed_same_orbs() {
    let a = plan(&mut rng(), &OrbConfig::default(), 0);
    let b = plan(&mut rng(), &OrbConfig::default(), 0);
    assert_eq!(a, b);
}

#[test]
fn keyframes_are_named_after_the_orb() {
    let spec = OrbSpec::generate(&mut rng(), 12, 0, &OrbConfig::default().colors);
    assert!(spec.keyframes().starts_with("@keyframes float-orb-12 {"));
    assert!(spec.animation().starts_with("float-orb-12 "));
    assert!(spec.animation().ends_with("s ease-in-out infinite"));
}

#[test]
fn style_positions_the_orb() {
    let spec = OrbSpec { left_pct: 12.5, top_pct: 80.0, ..OrbSpec::generate(&mut rng(), 0, 0, &OrbConfig::default().colors) };
    let style = spec.style();
    assert!(style.contains("left: 12.50%; top: 80.00%;"));
    assert!(style.contains("animation: float-orb-0 "));
    assert!(style.contains("blur(40px)"));
}

#[test]
fn empty_palette_does_not_panic() {
    let spec = OrbSpec::generate(&mut rng(), 0, 3, &[]);
    assert_eq!(spec.color.a, 0.0);
}
