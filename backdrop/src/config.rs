//! Option parsing and defaults for the particle and orb backgrounds.
//!
//! Options arrive from JavaScript as plain objects with camelCase keys. They
//! are decoded with serde into `*Options` (every key optional, missing keys
//! take the documented default) and then resolved into validated `*Config`
//! values. A value that fails validation falls back to its default and is
//! logged; nothing is thrown back to the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::color::{ParseColorError, Rgba};
use crate::consts::{
    DEFAULT_CONNECTION_COLOR, DEFAULT_CONNECTION_DISTANCE, DEFAULT_ORB_COLORS, DEFAULT_ORB_COUNT,
    DEFAULT_PARTICLE_COLOR, DEFAULT_PARTICLE_COUNT, DEFAULT_PARTICLE_SIZE, DEFAULT_PARTICLE_SPEED,
    HERO_PARTICLE_COUNT, HERO_PARTICLE_SIZE, HERO_PARTICLE_SPEED, MAX_ORB_COUNT, MAX_PARTICLE_COUNT,
};

const FALLBACK_PARTICLE_COLOR: Rgba = Rgba { r: 123, g: 92, b: 255, a: 0.6 };
const FALLBACK_CONNECTION_COLOR: Rgba = Rgba { r: 123, g: 92, b: 255, a: 0.2 };
const FALLBACK_ORB_COLORS: [Rgba; 3] = [
    Rgba { r: 123, g: 92, b: 255, a: 0.3 },
    Rgba { r: 183, g: 33, b: 255, a: 0.3 },
    Rgba { r: 33, g: 212, b: 253, a: 0.3 },
];

/// Errors raised while decoding or validating options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Color(#[from] ParseColorError),
    #[error("{field} must be a finite number >= 0, got {value}")]
    Number { field: &'static str, value: f64 },
    #[error("{field} of {value} exceeds the maximum of {max}")]
    Capped { field: &'static str, value: f64, max: usize },
    #[error("orb palette has no usable colors")]
    EmptyPalette,
    #[error("malformed options: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("options object is not JSON-serializable")]
    NotSerializable,
}

// =============================================================
// Particles
// =============================================================

/// Particle options as supplied by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleOptions {
    /// Decoded as a number so a bad count does not reject the other keys.
    pub particle_count: f64,
    pub particle_size: f64,
    pub particle_speed: f64,
    pub particle_color: String,
    pub connection_distance: f64,
    pub connection_color: String,
    /// Pins the random source; a fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            particle_count: count_option(DEFAULT_PARTICLE_COUNT),
            particle_size: DEFAULT_PARTICLE_SIZE,
            particle_speed: DEFAULT_PARTICLE_SPEED,
            particle_color: DEFAULT_PARTICLE_COLOR.to_owned(),
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            connection_color: DEFAULT_CONNECTION_COLOR.to_owned(),
            seed: None,
        }
    }
}

impl ParticleOptions {
    /// Fewer, larger, slower particles for hero banners.
    #[must_use]
    pub fn hero() -> Self {
        Self {
            particle_count: count_option(HERO_PARTICLE_COUNT),
            particle_size: HERO_PARTICLE_SIZE,
            particle_speed: HERO_PARTICLE_SPEED,
            ..Self::default()
        }
    }

    /// Validate every field, substituting defaults for rejected values.
    #[must_use]
    pub fn resolve(self) -> (ParticleConfig, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let config = ParticleConfig {
            particle_count: count(
                "particleCount",
                self.particle_count,
                DEFAULT_PARTICLE_COUNT,
                MAX_PARTICLE_COUNT,
                &mut errors,
            ),
            particle_size: non_negative("particleSize", self.particle_size, DEFAULT_PARTICLE_SIZE, &mut errors),
            particle_speed: non_negative("particleSpeed", self.particle_speed, DEFAULT_PARTICLE_SPEED, &mut errors),
            particle_color: color_or(&self.particle_color, FALLBACK_PARTICLE_COLOR, &mut errors),
            connection_distance: non_negative(
                "connectionDistance",
                self.connection_distance,
                DEFAULT_CONNECTION_DISTANCE,
                &mut errors,
            ),
            connection_color: color_or(&self.connection_color, FALLBACK_CONNECTION_COLOR, &mut errors),
            seed: self.seed,
        };
        (config, errors)
    }
}

/// Validated particle configuration, immutable once an instance is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub particle_count: usize,
    pub particle_size: f64,
    pub particle_speed: f64,
    pub particle_color: Rgba,
    pub connection_distance: f64,
    pub connection_color: Rgba,
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_size: DEFAULT_PARTICLE_SIZE,
            particle_speed: DEFAULT_PARTICLE_SPEED,
            particle_color: FALLBACK_PARTICLE_COLOR,
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            connection_color: FALLBACK_CONNECTION_COLOR,
            seed: None,
        }
    }
}

// =============================================================
// Orbs
// =============================================================

/// Orb options as supplied by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbOptions {
    pub orb_count: f64,
    pub colors: Vec<String>,
    pub seed: Option<u64>,
}

impl Default for OrbOptions {
    fn default() -> Self {
        Self {
            orb_count: count_option(DEFAULT_ORB_COUNT),
            colors: DEFAULT_ORB_COLORS.iter().map(|c| (*c).to_owned()).collect(),
            seed: None,
        }
    }
}

impl OrbOptions {
    /// Parse the palette, dropping unusable entries. An empty result falls
    /// back to the default palette.
    #[must_use]
    pub fn resolve(self) -> (OrbConfig, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let orb_count = count("orbCount", self.orb_count, DEFAULT_ORB_COUNT, MAX_ORB_COUNT, &mut errors);
        let mut colors = Vec::with_capacity(self.colors.len());
        for raw in &self.colors {
            match raw.parse::<Rgba>() {
                Ok(c) => colors.push(c),
                Err(err) => errors.push(err.into()),
            }
        }
        if colors.is_empty() {
            errors.push(ConfigError::EmptyPalette);
            colors = FALLBACK_ORB_COLORS.to_vec();
        }
        (OrbConfig { orb_count, colors, seed: self.seed }, errors)
    }
}

/// Validated orb configuration. `colors` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbConfig {
    pub orb_count: usize,
    pub colors: Vec<Rgba>,
    pub seed: Option<u64>,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self { orb_count: DEFAULT_ORB_COUNT, colors: FALLBACK_ORB_COLORS.to_vec(), seed: None }
    }
}

// =============================================================
// Decoding
// =============================================================

/// Decode options from a JSON document.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] if the JSON does not match the shape of `T`.
pub fn parse_options<T: DeserializeOwned>(json: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode options from a JavaScript value. `undefined` and `null` yield defaults.
///
/// # Errors
///
/// Returns [`ConfigError::NotSerializable`] if the value cannot be passed
/// through `JSON.stringify`, or [`ConfigError::Malformed`] if the result does
/// not match the shape of `T`.
pub fn options_from_js<T: DeserializeOwned + Default>(value: &JsValue) -> Result<T, ConfigError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    let json = js_sys::JSON::stringify(value).map_err(|_| ConfigError::NotSerializable)?;
    let json = JsValue::from(json).as_string().ok_or(ConfigError::NotSerializable)?;
    parse_options(&json)
}

/// Decode and resolve particle options from the page, logging anything rejected.
#[must_use]
pub fn particle_config_from_js(value: &JsValue) -> ParticleConfig {
    let options = options_from_js::<ParticleOptions>(value).unwrap_or_else(|err| {
        log::warn!("particle options ignored: {err}");
        ParticleOptions::default()
    });
    let (config, errors) = options.resolve();
    report("particle", &errors);
    config
}

/// Decode and resolve orb options from the page, logging anything rejected.
#[must_use]
pub fn orb_config_from_js(value: &JsValue) -> OrbConfig {
    let options = options_from_js::<OrbOptions>(value).unwrap_or_else(|err| {
        log::warn!("orb options ignored: {err}");
        OrbOptions::default()
    });
    let (config, errors) = options.resolve();
    report("orb", &errors);
    config
}

fn report(kind: &str, errors: &[ConfigError]) {
    for err in errors {
        log::warn!("{kind} option replaced by default: {err}");
    }
}

fn non_negative(field: &'static str, value: f64, fallback: f64, errors: &mut Vec<ConfigError>) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        errors.push(ConfigError::Number { field, value });
        fallback
    }
}

/// Validate a count: unusable values fall back, fractions truncate and
/// anything above `max` is capped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn count(field: &'static str, value: f64, fallback: usize, max: usize, errors: &mut Vec<ConfigError>) -> usize {
    if !value.is_finite() || value < 0.0 {
        errors.push(ConfigError::Number { field, value });
        return fallback;
    }
    let whole = value.trunc();
    if whole > max as f64 {
        errors.push(ConfigError::Capped { field, value, max });
        return max;
    }
    whole as usize
}

#[allow(clippy::cast_precision_loss)]
fn count_option(n: usize) -> f64 {
    n as f64
}

fn color_or(raw: &str, fallback: Rgba, errors: &mut Vec<ConfigError>) -> Rgba {
    raw.parse().unwrap_or_else(|err: ParseColorError| {
        errors.push(err.into());
        fallback
    })
}
