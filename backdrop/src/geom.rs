//! Points and surface bounds in CSS pixel space.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Width and height of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `p` lies inside `[0, width] × [0, height]`, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Convert a CSS length to a canvas backing-store dimension.
///
/// Negative and non-finite inputs map to zero; fractions are truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pixel_extent(css: f64) -> u32 {
    if css.is_finite() && css > 0.0 {
        css.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}
