//! Particle simulation, independent of any browser API.
//!
//! A [`ParticleField`] owns a fixed number of [`Particle`]s moving inside a
//! surface of known [`Size`]. Each [`ParticleField::step`] advances every
//! particle by its velocity, pushes it away from the pointer when the pointer
//! is close, and reflects it off the surface edges. [`ParticleField::connections`]
//! yields the line segments the renderer draws between nearby pairs.
//!
//! All randomness comes from the caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces a field exactly.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::config::ParticleConfig;
use crate::consts::{
    CONNECTION_ALPHA_SCALE, MIN_PARTICLE_OPACITY, PARTICLE_OPACITY_SPAN, POINTER_SENTINEL, REPULSION_RADIUS,
    REPULSION_STRENGTH,
};
use crate::geom::{Point, Size};

/// A single moving point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Horizontal velocity in pixels per frame.
    pub vx: f64,
    /// Vertical velocity in pixels per frame.
    pub vy: f64,
    /// Circle radius in pixels.
    pub size: f64,
    /// Fill alpha in `[0, 1]`.
    pub opacity: f64,
}

impl Particle {
    /// Draw a particle uniformly over `bounds` with randomized motion and look.
    pub fn spawn<R: Rng>(rng: &mut R, bounds: Size, config: &ParticleConfig) -> Self {
        Self {
            x: rng.random::<f64>() * bounds.width,
            y: rng.random::<f64>() * bounds.height,
            vx: (rng.random::<f64>() - 0.5) * config.particle_speed,
            vy: (rng.random::<f64>() - 0.5) * config.particle_speed,
            size: rng.random::<f64>() * config.particle_size + 1.0,
            opacity: rng.random::<f64>() * PARTICLE_OPACITY_SPAN + MIN_PARTICLE_OPACITY,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A line to draw between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: Point,
    pub to: Point,
    /// Stroke alpha, already scaled by [`CONNECTION_ALPHA_SCALE`].
    pub alpha: f64,
}

/// Stroke alpha for a pair `distance` apart, or `None` if they are not connected.
///
/// Falls off linearly from [`CONNECTION_ALPHA_SCALE`] at distance zero to zero
/// at `threshold`.
#[must_use]
pub fn connection_alpha(distance: f64, threshold: f64) -> Option<f64> {
    if distance < threshold {
        Some((1.0 - distance / threshold) * CONNECTION_ALPHA_SCALE)
    } else {
        None
    }
}

/// Displacement pushing a particle at `particle` away from `pointer`.
///
/// Zero at or beyond [`REPULSION_RADIUS`]. Inside it the push points from the
/// pointer through the particle and its length is
/// `(REPULSION_RADIUS - d) / REPULSION_RADIUS * REPULSION_STRENGTH`, falling
/// linearly to zero at the rim. A particle exactly under the pointer is pushed
/// along +x.
#[must_use]
pub fn repulsion(particle: Point, pointer: Point) -> (f64, f64) {
    let dx = particle.x - pointer.x;
    let dy = particle.y - pointer.y;
    let distance = dx.hypot(dy);
    if distance.is_nan() || distance >= REPULSION_RADIUS {
        return (0.0, 0.0);
    }
    let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
    let push = force * REPULSION_STRENGTH;
    if distance < f64::MIN_POSITIVE {
        return (push, 0.0);
    }
    (dx / distance * push, dy / distance * push)
}

/// Bounce one coordinate off `[0, extent]`.
///
/// The velocity is pointed back into the surface and the overshoot is
/// mirrored across the edge, so the coordinate always ends up inside.
fn reflect(pos: &mut f64, vel: &mut f64, extent: f64) {
    if *pos < 0.0 {
        *pos = (-*pos).min(extent);
        *vel = vel.abs();
    } else if *pos > extent {
        *pos = (2.0 * extent - *pos).max(0.0);
        *vel = -vel.abs();
    }
}

/// Last known pointer position relative to the surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Point,
}

impl Default for PointerState {
    fn default() -> Self {
        Self { position: Point::new(POINTER_SENTINEL, POINTER_SENTINEL) }
    }
}

impl PointerState {
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }
}

/// A fixed-size set of particles animating inside a surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    bounds: Size,
    particles: Vec<Particle>,
    pointer: PointerState,
}

impl ParticleField {
    /// Spawn `config.particle_count` particles over `bounds`.
    pub fn new<R: Rng>(config: ParticleConfig, bounds: Size, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(rng, bounds, &config))
            .collect();
        Self { config, bounds, particles, pointer: PointerState::default() }
    }

    /// Build a field from explicit particles.
    #[must_use]
    pub fn from_particles(config: ParticleConfig, bounds: Size, particles: Vec<Particle>) -> Self {
        Self { config, bounds, particles, pointer: PointerState::default() }
    }

    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Adopt new surface bounds. Particles keep their positions; any left
    /// outside are brought back by the next [`step`](Self::step).
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Record the pointer position relative to the surface origin.
    pub fn pointer_moved(&mut self, at: Point) {
        self.pointer.position = at;
    }

    /// Park the pointer far outside the surface, disabling repulsion.
    pub fn pointer_left(&mut self) {
        self.pointer = PointerState::default();
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        let pointer = self.pointer.position;
        let Size { width, height } = self.bounds;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            let (px, py) = repulsion(p.position(), pointer);
            p.x += px;
            p.y += py;

            reflect(&mut p.x, &mut p.vx, width);
            reflect(&mut p.y, &mut p.vy, height);
        }
    }

    /// Every unordered pair closer than the connection distance.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.config.connection_distance;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let (from, to) = (a.position(), b.position());
                connection_alpha(from.distance_to(to), threshold).map(|alpha| Connection { from, to, alpha })
            })
        })
    }
}
