#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Particle options
// =============================================================

#[test]
fn particle_defaults_match_documented_values() {
    let (config, errors) = ParticleOptions::default().resolve();
    assert!(errors.is_empty());
    assert_eq!(config.particle_count, 50);
    assert_eq!(config.particle_size, 2.0);
    assert_eq!(config.particle_speed, 0.5);
    assert_eq!(config.particle_color.to_string(), "rgba(123, 92, 255, 0.6)");
    assert_eq!(config.connection_distance, 150.0);
    assert_eq!(config.connection_color.to_string(), "rgba(123, 92, 255, 0.2)");
    assert_eq!(config.seed, None);
}

#[test]
fn resolved_defaults_equal_config_default() {
    let (config, _) = ParticleOptions::default().resolve();
    assert_eq!(config, ParticleConfig::default());
}

#[test]
fn empty_object_yields_defaults() {
    let options: ParticleOptions = parse_options("{}").expect("empty object parses");
    assert_eq!(options, ParticleOptions::default());
}

#[test]
fn supplied_keys_override_defaults() {
    let options: ParticleOptions =
        parse_options(r#"{"particleCount": 5, "connectionDistance": 80, "seed": 7}"#).expect("parses");
    let (config, errors) = options.resolve();
    assert!(errors.is_empty());
    assert_eq!(config.particle_count, 5);
    assert_eq!(config.connection_distance, 80.0);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.particle_speed, 0.5);
}

#[test]
fn zero_count_is_respected() {
    let options: ParticleOptions = parse_options(r#"{"particleCount": 0}"#).expect("parses");
    assert_eq!(options.resolve().0.particle_count, 0);
}

#[test]
fn unknown_keys_are_ignored() {
    let options: ParticleOptions = parse_options(r#"{"sparkle": true, "particleSize": 4}"#).expect("parses");
    assert_eq!(options.particle_size, 4.0);
}

#[test]
fn wrong_type_is_malformed() {
    let err = parse_options::<ParticleOptions>(r#"{"particleCount": "many"}"#).expect_err("string count");
    assert!(matches!(err, ConfigError::Malformed(_)));
}

#[test]
fn bad_count_keeps_the_other_keys() {
    for raw in [
        r##"{"particleCount": 5.5, "particleColor": "#00ff00", "connectionDistance": 80}"##,
        r##"{"particleCount": -1, "particleColor": "#00ff00", "connectionDistance": 80}"##,
    ] {
        let options: ParticleOptions = parse_options(raw).expect("numeric count parses");
        let (config, _) = options.resolve();
        assert_eq!(config.particle_color.to_string(), "rgba(0, 255, 0, 1)", "{raw}");
        assert_eq!(config.connection_distance, 80.0, "{raw}");
    }
}

#[test]
fn fractional_count_truncates() {
    let options: ParticleOptions = parse_options(r#"{"particleCount": 5.9}"#).expect("parses");
    let (config, errors) = options.resolve();
    assert_eq!(config.particle_count, 5);
    assert!(errors.is_empty());
}

#[test]
fn negative_count_falls_back_and_reports() {
    let options: ParticleOptions = parse_options(r#"{"particleCount": -3}"#).expect("parses");
    let (config, errors) = options.resolve();
    assert_eq!(config.particle_count, 50);
    assert!(matches!(errors.as_slice(), [ConfigError::Number { field: "particleCount", .. }]));
}

#[test]
fn huge_count_is_capped() {
    let options: ParticleOptions = parse_options(r#"{"particleCount": 1e9}"#).expect("parses");
    let (config, errors) = options.resolve();
    assert_eq!(config.particle_count, MAX_PARTICLE_COUNT);
    assert!(matches!(
        errors.as_slice(),
        [ConfigError::Capped { field: "particleCount", max: MAX_PARTICLE_COUNT, .. }]
    ));
}

#[test]
fn count_at_the_cap_is_accepted() {
    let options = ParticleOptions { particle_count: 500.0, ..ParticleOptions::default() };
    let (config, errors) = options.resolve();
    assert_eq!(config.particle_count, MAX_PARTICLE_COUNT);
    assert!(errors.is_empty());
}

#[test]
fn negative_numbers_fall_back_individually() {
    let options = ParticleOptions { particle_speed: -1.0, particle_size: 6.0, ..ParticleOptions::default() };
    let (config, errors) = options.resolve();
    assert_eq!(config.particle_speed, 0.5);
    assert_eq!(config.particle_size, 6.0);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ConfigError::Number { field: "particleSpeed", .. }));
}

#[test]
fn bad_color_falls_back_and_reports() {
    let options = ParticleOptions { connection_color: "glitter".to_owned(), ..ParticleOptions::default() };
    let (config, errors) = options.resolve();
    assert_eq!(config.connection_color.to_string(), "rgba(123, 92, 255, 0.2)");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("glitter"));
}

#[test]
fn custom_colors_are_parsed() {
    let options = ParticleOptions { particle_color: "#21d4fd".to_owned(), ..ParticleOptions::default() };
    let (config, errors) = options.resolve();
    assert!(errors.is_empty());
    assert_eq!((config.particle_color.r, config.particle_color.g, config.particle_color.b), (0x21, 0xd4, 0xfd));
}

#[test]
fn hero_preset_is_smaller_and_slower() {
    let (config, _) = ParticleOptions::hero().resolve();
    assert_eq!(config.particle_count, 30);
    assert_eq!(config.particle_size, 3.0);
    assert_eq!(config.particle_speed, 0.3);
    assert_eq!(config.connection_distance, 150.0);
}

// =============================================================
// Orb options
// =============================================================

#[test]
fn orb_defaults() {
    let (config, errors) = OrbOptions::default().resolve();
    assert!(errors.is_empty());
    assert_eq!(config.orb_count, 3);
    assert_eq!(config.colors.len(), 3);
    assert_eq!(config, OrbConfig::default());
}

#[test]
fn orb_palette_drops_bad_entries() {
    let options: OrbOptions =
        parse_options(r##"{"orbCount": 5, "colors": ["#000", "nope", "rgb(1, 2, 3)"]}"##).expect("parses");
    let (config, errors) = options.resolve();
    assert_eq!(config.orb_count, 5);
    assert_eq!(config.colors.len(), 2);
    assert_eq!(errors.len(), 1);
}

#[test]
fn bad_orb_count_keeps_the_palette() {
    let options: OrbOptions = parse_options(r##"{"orbCount": -2, "colors": ["#000"]}"##).expect("parses");
    let (config, errors) = options.resolve();
    assert_eq!(config.orb_count, 3);
    assert_eq!(config.colors.len(), 1);
    assert!(matches!(errors.as_slice(), [ConfigError::Number { field: "orbCount", .. }]));

    let options = OrbOptions { orb_count: 1000.0, ..OrbOptions::default() };
    let (config, errors) = options.resolve();
    assert_eq!(config.orb_count, MAX_ORB_COUNT);
    assert_eq!(errors.len(), 1);
}

#[test]
fn empty_orb_palette_uses_defaults() {
    let options = OrbOptions { colors: Vec::new(), ..OrbOptions::default() };
    let (config, errors) = options.resolve();
    assert_eq!(config.colors, OrbConfig::default().colors);
    assert!(matches!(errors.as_slice(), [ConfigError::EmptyPalette]));
}
