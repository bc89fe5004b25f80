//! Decorative page backgrounds and effects, compiled to WebAssembly.
//!
//! The crate owns everything that moves on the page: the interactive
//! particle field drawn on an overlay canvas, the floating gradient orbs,
//! button ripples, scroll reveals, hover and parallax touches and the
//! persisted light/dark theme.
//! Simulation and geometry live in browser-free modules so they can be
//! tested natively; the DOM-facing modules are thin wrappers around them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Particle simulation: spawning, stepping, repulsion, connections |
//! | [`background`] | [`background::ParticleBackground`], the canvas-backed instance |
//! | [`render`] | Draws a [`field::ParticleField`] to a 2D context |
//! | [`frame_loop`] | Cancellable `requestAnimationFrame` loop |
//! | [`orbs`] | [`orbs::GradientOrbBackground`] and its keyframe generation |
//! | [`config`] | Option parsing and defaults |
//! | [`color`] | `rgba()` parsing and alpha substitution |
//! | [`geom`] | Points and surface bounds |
//! | [`styles`] | One-time `<style>` injection |
//! | [`listener`] | DOM event listeners that detach on drop |
//! | [`theme`] | Light/dark theme preference and toggle |
//! | [`ripple`] | Button click ripples |
//! | [`reveal`] | Scroll-triggered fade-in |
//! | [`parallax`] | Pointer parallax for floating hero decorations |
//! | [`hover`] | Card lift on hover |
//! | [`gradient_text`] | Animated gradient headings |
//! | [`skeleton`] | Loading placeholders |
//! | [`smooth_scroll`] | Smooth in-page anchor scrolling |
//! | [`page`] | Page-load auto-initialization |
//! | [`consts`] | Shared numeric constants |

pub mod background;
pub mod color;
pub mod config;
pub mod consts;
pub mod field;
pub mod frame_loop;
pub mod geom;
pub mod gradient_text;
pub mod hover;
pub mod listener;
pub mod orbs;
pub mod page;
pub mod parallax;
pub mod render;
pub mod reveal;
pub mod ripple;
pub mod skeleton;
pub mod smooth_scroll;
pub mod styles;
pub mod theme;
