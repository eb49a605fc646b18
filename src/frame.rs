use crate::WebDriver;
use ink_core::{FrameId, FrameScheduler};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the animation-frame callback. Shared between the scheduler
/// (which hands it to `requestAnimationFrame`) and the owner (which drops it on
/// teardown).
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Monotonic milliseconds since mount.
#[derive(Clone, Copy)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// [`FrameScheduler`] on top of `requestAnimationFrame`.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameId> {
        let slot = self.callback.borrow();
        let closure = slot.as_ref()?;
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map(FrameId)
            .map_err(|e| log::error!("requestAnimationFrame error: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        _ = self.window.cancel_animation_frame(id.0);
    }
}

/// Install the per-frame callback and start the driver. The callback only
/// holds a weak reference, so dropping the driver ends the loop.
pub fn start_loop(driver: &Rc<RefCell<WebDriver>>, callback: &FrameCallback, clock: FrameClock) {
    let weak = Rc::downgrade(driver);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(driver) = weak.upgrade() {
            driver.borrow_mut().frame(clock.now_ms());
        }
    }) as Box<dyn FnMut()>));
    driver.borrow_mut().start(clock.now_ms());
}
