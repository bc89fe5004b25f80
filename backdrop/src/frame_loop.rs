//! Cancellable `requestAnimationFrame` loop.
//!
//! Each frame runs the tick callback and then requests exactly one more
//! frame, so frames never overlap. A shared [`RunFlag`] is checked before
//! every tick and every reschedule; [`FrameLoop::stop`] clears it, cancels
//! the pending request and releases the callback.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Shared running flag. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct RunFlag(Rc<Cell<bool>>);

impl Default for RunFlag {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl RunFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.0.get()
    }

    /// Clear the flag. Irreversible.
    pub fn stop(&self) {
        self.0.set(false);
    }
}

/// Handle to a running animation loop. Dropping it stops the loop.
pub struct FrameLoop {
    window: Window,
    flag: RunFlag,
    pending: Rc<Cell<Option<i32>>>,
    slot: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// Start calling `tick` once per animation frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no window or the first frame cannot be requested.
    pub fn start<F>(mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let flag = RunFlag::new();
        let pending = Rc::new(Cell::new(None));
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let cb = {
            let window = window.clone();
            let flag = flag.clone();
            let pending = Rc::clone(&pending);
            let slot_for_cb = Rc::clone(&slot);
            Closure::wrap(Box::new(move |_ts: f64| {
                pending.set(None);
                if !flag.is_running() {
                    return;
                }
                tick();
                if !flag.is_running() {
                    return;
                }
                let next = slot_for_cb
                    .borrow()
                    .as_ref()
                    .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
                match next {
                    Some(Ok(id)) => pending.set(Some(id)),
                    Some(Err(err)) => {
                        log::warn!("animation frame request failed, stopping loop: {err:?}");
                        flag.stop();
                    }
                    None => flag.stop(),
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *slot.borrow_mut() = Some(cb);
        Ok(Self { window, flag, pending, slot })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.flag.is_running()
    }

    /// Stop the loop. No tick runs after this returns.
    pub fn stop(&self) {
        self.flag.stop();
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::debug!("cancel_animation_frame({id}) failed: {err:?}");
            }
        }
        // Break the callback -> slot -> callback cycle.
        self.slot.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameLoop").field("running", &self.is_running()).finish_non_exhaustive()
    }
}
