//! Page-load auto-initialization.
//!
//! Finds the page's decorative roles and mounts the matching effect:
//! a hero banner gets a particle background, a landing page gets orbs, and
//! theme toggles, ripples, scroll reveals, parallax, card hovers, gradient
//! text, skeletons and anchor scrolling are wired once. Everything
//! mounted is owned by the returned [`PageEffects`], which the caller keeps
//! for the life of the page.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use web_sys::{Document, Element};

use crate::background::ParticleBackground;
use crate::config::{OrbConfig, ParticleOptions};
use crate::listener::EventListener;
use crate::orbs::GradientOrbBackground;
use crate::reveal::Reveal;
use crate::{gradient_text, hover, parallax, ripple, skeleton, smooth_scroll, theme};

pub const HERO_SELECTOR: &str = ".hero-section";
pub const HERO_FALLBACK_ID: &str = "hero-particles";
pub const LANDING_SELECTOR: &str = ".landing-page";
pub const LANDING_FALLBACK_ID: &str = "landing-orbs";

/// Effects mounted on the current page.
#[derive(Debug, Default)]
pub struct PageEffects {
    pub particles: Option<ParticleBackground>,
    pub orbs: Option<GradientOrbBackground>,
    pub reveal: Option<Reveal>,
    listeners: Vec<EventListener>,
}

impl PageEffects {
    /// Number of DOM listeners held.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Id to mount under: the element's own id, or `fallback` if it has none.
#[must_use]
pub fn container_id(existing: &str, fallback: &str) -> String {
    if existing.is_empty() { fallback.to_owned() } else { existing.to_owned() }
}

/// Locate the first element matching `selector` and make sure it has an id.
fn claim_role(document: &Document, selector: &str, fallback: &str) -> Option<String> {
    let el: Element = document.query_selector(selector).unwrap_or(None)?;
    let id = container_id(&el.id(), fallback);
    el.set_id(&id);
    Some(id)
}

/// Mount every effect the page has a role for.
#[must_use]
pub fn mount(document: &Document) -> PageEffects {
    let mut effects = PageEffects::default();

    match theme::install(document) {
        Ok(listeners) => effects.listeners.extend(listeners),
        Err(err) => log::warn!("theme toggle not wired: {err:?}"),
    }

    if let Some(id) = claim_role(document, HERO_SELECTOR, HERO_FALLBACK_ID) {
        let (config, _) = ParticleOptions::hero().resolve();
        effects.particles = Some(ParticleBackground::with_config(&id, config));
    }

    if let Some(id) = claim_role(document, LANDING_SELECTOR, LANDING_FALLBACK_ID) {
        effects.orbs = Some(GradientOrbBackground::with_config(&id, &OrbConfig::default()));
    }

    match ripple::install(document) {
        Ok(listeners) => effects.listeners.extend(listeners),
        Err(err) => log::warn!("button ripples not wired: {err:?}"),
    }

    match Reveal::install(document) {
        Ok(reveal) => effects.reveal = Some(reveal),
        Err(err) => log::warn!("scroll reveal not wired: {err:?}"),
    }

    match parallax::install(document) {
        Ok(listener) => effects.listeners.extend(listener),
        Err(err) => log::warn!("parallax not wired: {err:?}"),
    }

    match hover::install(document) {
        Ok(listeners) => effects.listeners.extend(listeners),
        Err(err) => log::warn!("card hovers not wired: {err:?}"),
    }

    if let Err(err) = gradient_text::install(document) {
        log::warn!("gradient text not animated: {err:?}");
    }

    if let Err(err) = skeleton::install(document) {
        log::warn!("loading skeletons not applied: {err:?}");
    }

    match smooth_scroll::install(document) {
        Ok(listeners) => effects.listeners.extend(listeners),
        Err(err) => log::warn!("anchor scrolling not wired: {err:?}"),
    }

    log::info!(
        "page effects mounted: particles={} orbs={} listeners={}",
        effects.particles.as_ref().is_some_and(ParticleBackground::is_active),
        effects.orbs.as_ref().map_or(0, GradientOrbBackground::orb_count),
        effects.listeners.len()
    );
    effects
}
