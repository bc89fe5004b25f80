//! Rendering: draws a particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the field and produces pixels; it never mutates simulation state.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`. The
//! frame loop in [`crate::background`] logs the error and keeps animating.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{CONNECTION_LINE_WIDTH, GLOW_BLUR_PX};
use crate::field::ParticleField;

/// Draw one frame: clear, connections, then particles on top.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    draw_connections(ctx, field);
    draw_particles(ctx, field)
}

fn draw_connections(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let color = field.config().connection_color;
    ctx.set_line_width(CONNECTION_LINE_WIDTH);
    for link in field.connections() {
        ctx.begin_path();
        ctx.move_to(link.from.x, link.from.y);
        ctx.line_to(link.to.x, link.to.y);
        ctx.set_stroke_style_str(&color.with_alpha(link.alpha).to_string());
        ctx.stroke();
    }
}

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    let color = field.config().particle_color;
    let glow = color.to_string();
    for p in field.particles() {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, TAU)?;
        ctx.set_fill_style_str(&color.with_alpha(p.opacity).to_string());
        ctx.fill();

        // Second fill with a shadow gives the halo.
        ctx.set_shadow_blur(GLOW_BLUR_PX);
        ctx.set_shadow_color(&glow);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
    Ok(())
}
