//! Floating gradient orbs.
//!
//! Each orb is a blurred radial-gradient `div` with its own looping drift
//! animation. Motion is entirely declarative: the crate generates a
//! uniquely named `@keyframes` rule per orb, injects it once, and never
//! touches the orb again until teardown.

#[cfg(test)]
#[path = "orbs_test.rs"]
mod orbs_test;

use std::cell::Cell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::color::Rgba;
use crate::config::{self, OrbConfig};
use crate::consts::{
    ORB_BLUR_PX, ORB_DRIFT_PX, ORB_DURATION_SPAN_S, ORB_MIN_DURATION_S, ORB_MIN_SIZE_PX, ORB_SIZE_SPAN_PX,
};
use crate::styles::{self, Waypoint};

/// Scale reached at the 25 %, 50 % and 75 % keyframes.
const WAYPOINT_SCALES: [(u8, f64); 3] = [(25, 1.1), (50, 0.9), (75, 1.05)];

thread_local! {
    /// Next keyframes serial; names stay unique across instances.
    static NEXT_ORB: Cell<usize> = const { Cell::new(0) };
}

/// Everything needed to place and animate one orb.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbSpec {
    /// Keyframes rule name.
    pub name: String,
    pub diameter_px: f64,
    pub color: Rgba,
    /// Horizontal start position, percent of the container width.
    pub left_pct: f64,
    /// Vertical start position, percent of the container height.
    pub top_pct: f64,
    pub duration_s: f64,
    pub waypoints: [Waypoint; 3],
}

impl OrbSpec {
    /// Randomize the orb numbered `serial`, coloring it from `palette` by `index`.
    pub fn generate<R: Rng>(rng: &mut R, serial: usize, index: usize, palette: &[Rgba]) -> Self {
        let color = palette.get(index % palette.len().max(1)).copied().unwrap_or_else(|| Rgba::new(0, 0, 0, 0.0));
        let diameter_px = rng.random::<f64>() * ORB_SIZE_SPAN_PX + ORB_MIN_SIZE_PX;
        let duration_s = ORB_MIN_DURATION_S + rng.random::<f64>() * ORB_DURATION_SPAN_S;
        let left_pct = rng.random::<f64>() * 100.0;
        let top_pct = rng.random::<f64>() * 100.0;
        let waypoints = WAYPOINT_SCALES.map(|(at, scale)| Waypoint {
            at,
            dx: rng.random::<f64>() * 2.0 * ORB_DRIFT_PX - ORB_DRIFT_PX,
            dy: rng.random::<f64>() * 2.0 * ORB_DRIFT_PX - ORB_DRIFT_PX,
            scale,
        });
        Self { name: format!("float-orb-{serial}"), diameter_px, color, left_pct, top_pct, duration_s, waypoints }
    }

    /// The `@keyframes` rule for this orb.
    #[must_use]
    pub fn keyframes(&self) -> String {
        styles::drift_keyframes(&self.name, &self.waypoints)
    }

    /// The `animation` shorthand for this orb.
    #[must_use]
    pub fn animation(&self) -> String {
        format!("{} {:.2}s ease-in-out infinite", self.name, self.duration_s)
    }

    /// Inline style for the orb element, including its start position.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "{} left: {:.2}%; top: {:.2}%;",
            styles::orb_style(self.diameter_px, self.color, ORB_BLUR_PX, &self.animation()),
            self.left_pct,
            self.top_pct
        )
    }
}

/// Generate `config.orb_count` specs with consecutive serials starting at `first_serial`.
pub fn plan<R: Rng>(rng: &mut R, config: &OrbConfig, first_serial: usize) -> Vec<OrbSpec> {
    (0..config.orb_count)
        .map(|i| OrbSpec::generate(rng, first_serial + i, i, &config.colors))
        .collect()
}

/// Decorative orbs floating behind a container's content.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct GradientOrbBackground {
    orbs: Vec<Element>,
}

#[wasm_bindgen]
impl GradientOrbBackground {
    /// `new GradientOrbBackground(containerId, options?)`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, options: JsValue) -> GradientOrbBackground {
        Self::with_config(container_id, &config::orb_config_from_js(&options))
    }

    /// Remove every orb. Injected keyframes stay for the page's lifetime.
    pub fn destroy(&mut self) {
        for orb in self.orbs.drain(..) {
            orb.remove();
        }
    }

    /// Number of orbs attached.
    #[wasm_bindgen(getter, js_name = orbCount)]
    pub fn orb_count(&self) -> usize {
        self.orbs.len()
    }
}

impl GradientOrbBackground {
    /// Mount over the element with id `container_id`. A missing container
    /// yields an instance with no orbs.
    #[must_use]
    pub fn with_config(container_id: &str, config: &OrbConfig) -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        let Some(container) = document.get_element_by_id(container_id) else {
            return Self::default();
        };

        let first_serial = NEXT_ORB.with(|n| {
            let first = n.get();
            n.set(first + config.orb_count);
            first
        });
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()),
        };

        let mut mounted = Self::default();
        if let Err(err) = prepare_container(&container) {
            log::warn!("orb container #{container_id} not styled: {err:?}");
        }
        for spec in plan(&mut rng, config, first_serial) {
            match mount_orb(&document, &container, &spec) {
                Ok(orb) => mounted.orbs.push(orb),
                Err(err) => log::warn!("orb {} not mounted: {err:?}", spec.name),
            }
        }
        mounted
    }
}

impl Drop for GradientOrbBackground {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn prepare_container(container: &Element) -> Result<(), JsValue> {
    if let Some(host) = container.dyn_ref::<HtmlElement>() {
        let style = host.style();
        style.set_property("position", "relative")?;
        style.set_property("overflow", "hidden")?;
    }
    Ok(())
}

fn mount_orb(document: &Document, container: &Element, spec: &OrbSpec) -> Result<Element, JsValue> {
    styles::ensure(document, &spec.name, &spec.keyframes())?;
    let orb = document.create_element("div")?;
    orb.set_attribute("style", &spec.style())?;
    container.append_child(&orb)?;
    Ok(orb)
}
