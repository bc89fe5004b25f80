//! CSS color parsing and alpha substitution.
//!
//! Particles and connection lines are drawn with the configured color but a
//! per-item alpha, so colors are kept parsed rather than as raw strings.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

/// The string was not a color this module understands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized color {0:?} (expected #rgb, #rrggbb, rgb() or rgba())")]
pub struct ParseColorError(pub String);

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    /// The same color with its alpha replaced.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = function_body(trimmed, "rgba") {
            parse_channels(body, true)
        } else if let Some(body) = function_body(trimmed, "rgb") {
            parse_channels(body, false)
        } else {
            None
        };
        parsed.ok_or_else(|| ParseColorError(raw.to_owned()))
    }
}

/// Return the text between `name(` and the closing `)`, case-insensitively.
fn function_body<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let open = s.find('(')?;
    if !s[..open].trim_end().eq_ignore_ascii_case(name) {
        return None;
    }
    s[open + 1..].strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16);
    let (r, g, b) = match hex.len() {
        3 => (
            channel(&hex[0..1].repeat(2)),
            channel(&hex[1..2].repeat(2)),
            channel(&hex[2..3].repeat(2)),
        ),
        6 => (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])),
        _ => return None,
    };
    match (r, g, b) {
        (Ok(r), Ok(g), Ok(b)) => Some(Rgba::new(r, g, b, 1.0)),
        _ => None,
    }
}

fn parse_channels(body: &str, with_alpha: bool) -> Option<Rgba> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let r = parse_byte(parts[0])?;
    let g = parse_byte(parts[1])?;
    let b = parse_byte(parts[2])?;
    let a = if with_alpha {
        let a: f64 = parts[3].parse().unwrap_or(f64::NAN);
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        a
    } else {
        1.0
    };
    Some(Rgba::new(r, g, b, a))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_byte(s: &str) -> Option<u8> {
    let v: f64 = s.parse().unwrap_or(f64::NAN);
    if (0.0..=255.0).contains(&v) { Some(v.round() as u8) } else { None }
}
