//! The canvas-backed particle background exposed to JavaScript.
//!
//! [`ParticleBackground`] resolves its container, overlays a click-through
//! canvas sized to it, spawns a [`ParticleField`] and drives it from a
//! [`FrameLoop`]. If the container does not exist the instance is inert: it
//! touches nothing and reports nothing.
//!
//! Teardown order matters: the frame loop is stopped before the canvas is
//! detached, so no frame ever draws to a removed surface.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::config::{self, ParticleConfig};
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::geom::{Point, Size, pixel_extent};
use crate::listener::EventListener;
use crate::render;
use crate::styles::OVERLAY_CANVAS_CSS;

/// An animated particle overlay bound to one container element.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct ParticleBackground {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// `new ParticleBackground(containerId, options?)`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, options: JsValue) -> ParticleBackground {
        Self::with_config(container_id, config::particle_config_from_js(&options))
    }

    /// Stop animating and remove the canvas. Safe to call more than once.
    pub fn destroy(&mut self) {
        self.mounted.take();
    }

    /// Whether the instance is attached and animating.
    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.mounted.as_ref().is_some_and(|m| m.frames.is_running())
    }

    /// Number of particles; zero for an inert instance.
    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mounted.as_ref().map_or(0, |m| m.field.borrow().len())
    }
}

impl ParticleBackground {
    /// An instance that does nothing.
    #[must_use]
    pub fn inert() -> Self {
        Self::default()
    }

    /// Mount over the element with id `container_id` using a resolved config.
    #[must_use]
    pub fn with_config(container_id: &str, config: ParticleConfig) -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::inert();
        };
        let Some(container) = document.get_element_by_id(container_id) else {
            return Self::inert();
        };
        match Mounted::attach(&document, container, config) {
            Ok(mounted) => Self { mounted: Some(mounted) },
            Err(err) => {
                log::warn!("particle background on #{container_id} not mounted: {err:?}");
                Self::inert()
            }
        }
    }

    /// Run `f` against the live field, if mounted.
    pub fn with_field<T>(&self, f: impl FnOnce(&ParticleField) -> T) -> Option<T> {
        self.mounted.as_ref().map(|m| f(&m.field.borrow()))
    }

    /// The overlay canvas, if mounted.
    #[must_use]
    pub fn canvas(&self) -> Option<&HtmlCanvasElement> {
        self.mounted.as_ref().map(|m| &m.canvas)
    }
}

/// Browser resources owned by a mounted instance.
struct Mounted {
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
    frames: FrameLoop,
    _listeners: Vec<EventListener>,
}

impl Mounted {
    fn attach(document: &Document, container: Element, config: ParticleConfig) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.style().set_css_text(OVERLAY_CANVAS_CSS);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        if let Some(host) = container.dyn_ref::<HtmlElement>() {
            host.style().set_property("position", "relative")?;
        }
        container.append_child(&canvas)?;

        match Self::start(container, canvas.clone(), ctx, config) {
            Ok(mounted) => Ok(mounted),
            Err(err) => {
                canvas.remove();
                Err(err)
            }
        }
    }

    fn start(
        container: Element,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        config: ParticleConfig,
    ) -> Result<Self, JsValue> {
        let bounds = fit_canvas(&canvas, &container);
        let seed = config.seed.unwrap_or_else(random_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let field = Rc::new(RefCell::new(ParticleField::new(config, bounds, &mut rng)));
        log::debug!("particle background mounted: {} particles, {bounds:?}, seed {seed}", field.borrow().len());

        let listeners = bind_events(&container, &canvas, &field)?;

        let frames = {
            let field = Rc::clone(&field);
            FrameLoop::start(move || {
                let mut field = field.borrow_mut();
                field.step();
                if let Err(err) = render::draw(&ctx, &field) {
                    log::warn!("particle frame not drawn: {err:?}");
                }
            })?
        };

        Ok(Self { canvas, field, frames, _listeners: listeners })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frames.stop();
        self.canvas.remove();
    }
}

impl std::fmt::Debug for Mounted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mounted").field("frames", &self.frames).finish_non_exhaustive()
    }
}

/// Size the canvas backing store to the container's rendered box.
fn fit_canvas(canvas: &HtmlCanvasElement, container: &Element) -> Size {
    let rect = container.get_bounding_client_rect();
    let (width, height) = (pixel_extent(rect.width()), pixel_extent(rect.height()));
    canvas.set_width(width);
    canvas.set_height(height);
    Size::new(f64::from(width), f64::from(height))
}

fn bind_events(
    container: &Element,
    canvas: &HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) -> Result<Vec<EventListener>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let on_resize = {
        let container = container.clone();
        let canvas = canvas.clone();
        let field = Rc::clone(field);
        move |_| {
            let bounds = fit_canvas(&canvas, &container);
            field.borrow_mut().resize(bounds);
        }
    };

    let on_move = {
        let container = container.clone();
        let field = Rc::clone(field);
        move |event: web_sys::Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let rect = container.get_bounding_client_rect();
                let at = Point::new(f64::from(mouse.client_x()) - rect.left(), f64::from(mouse.client_y()) - rect.top());
                field.borrow_mut().pointer_moved(at);
            }
        }
    };

    let on_leave = {
        let field = Rc::clone(field);
        move |_| field.borrow_mut().pointer_left()
    };

    Ok(vec![
        EventListener::new(&window, "resize", on_resize)?,
        EventListener::new(container, "mousemove", on_move)?,
        EventListener::new(container, "mouseleave", on_leave)?,
    ])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}
