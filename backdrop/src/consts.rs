//! Shared numeric constants for the backdrop crate.

// ── Particle defaults ───────────────────────────────────────────

/// Number of particles when the options leave it unspecified.
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Upper bound on `particleCount`. Connections cost O(n²) per frame.
pub const MAX_PARTICLE_COUNT: usize = 500;

/// Base particle radius; actual radii fall in `[1, size + 1)`.
pub const DEFAULT_PARTICLE_SIZE: f64 = 2.0;

/// Velocity scale; each axis starts in `[-speed / 2, speed / 2)`.
pub const DEFAULT_PARTICLE_SPEED: f64 = 0.5;

pub const DEFAULT_PARTICLE_COLOR: &str = "rgba(123, 92, 255, 0.6)";

/// Pairs closer than this (in surface pixels) are joined by a line.
pub const DEFAULT_CONNECTION_DISTANCE: f64 = 150.0;

pub const DEFAULT_CONNECTION_COLOR: &str = "rgba(123, 92, 255, 0.2)";

/// Lowest particle opacity.
pub const MIN_PARTICLE_OPACITY: f64 = 0.2;

/// Width of the opacity range above [`MIN_PARTICLE_OPACITY`].
pub const PARTICLE_OPACITY_SPAN: f64 = 0.5;

// ── Per-frame physics ───────────────────────────────────────────

/// Pointer influence radius in surface pixels.
pub const REPULSION_RADIUS: f64 = 100.0;

/// Largest per-frame push in pixels, reached with the pointer on the particle.
pub const REPULSION_STRENGTH: f64 = 0.01;

/// Pointer position used while the pointer is outside the container.
pub const POINTER_SENTINEL: f64 = -1000.0;

// ── Drawing ─────────────────────────────────────────────────────

/// Maximum connection line alpha (reached at distance 0).
pub const CONNECTION_ALPHA_SCALE: f64 = 0.3;

pub const CONNECTION_LINE_WIDTH: f64 = 1.0;

/// Shadow blur for the particle glow, in pixels.
pub const GLOW_BLUR_PX: f64 = 10.0;

// ── Hero preset ─────────────────────────────────────────────────

pub const HERO_PARTICLE_COUNT: usize = 30;
pub const HERO_PARTICLE_SIZE: f64 = 3.0;
pub const HERO_PARTICLE_SPEED: f64 = 0.3;

// ── Orbs ────────────────────────────────────────────────────────

pub const DEFAULT_ORB_COUNT: usize = 3;

/// Upper bound on `orbCount`.
pub const MAX_ORB_COUNT: usize = 24;

pub const DEFAULT_ORB_COLORS: [&str; 3] = [
    "rgba(123, 92, 255, 0.3)",
    "rgba(183, 33, 255, 0.3)",
    "rgba(33, 212, 253, 0.3)",
];

/// Orb diameters fall in `[ORB_MIN_SIZE_PX, ORB_MIN_SIZE_PX + ORB_SIZE_SPAN_PX)`.
pub const ORB_MIN_SIZE_PX: f64 = 200.0;
pub const ORB_SIZE_SPAN_PX: f64 = 400.0;

/// Loop durations fall in `[ORB_MIN_DURATION_S, ORB_MIN_DURATION_S + ORB_DURATION_SPAN_S)`.
pub const ORB_MIN_DURATION_S: f64 = 15.0;
pub const ORB_DURATION_SPAN_S: f64 = 10.0;

/// Waypoint offsets fall in `[-ORB_DRIFT_PX, ORB_DRIFT_PX)` on each axis.
pub const ORB_DRIFT_PX: f64 = 100.0;

pub const ORB_BLUR_PX: f64 = 40.0;

// ── Ripple ──────────────────────────────────────────────────────

/// How long a ripple span stays attached to its button.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// ── Theme ───────────────────────────────────────────────────────

/// Duration of the body background transition after a theme switch.
pub const THEME_TRANSITION_MS: u32 = 300;

// ── Parallax ────────────────────────────────────────────────────

/// Speed added per element; the n-th decoration moves `n * step` times as far.
pub const PARALLAX_SPEED_STEP: f64 = 0.5;

/// Offset span in pixels at unit speed as the pointer crosses the viewport.
pub const PARALLAX_RANGE_PX: f64 = 20.0;
