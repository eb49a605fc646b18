pub mod pointer;
pub mod viewport;

use crate::WebDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener that detaches itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] could not listen for {}: {:?}", kind, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Attach every listener the trail needs to `window`.
pub fn wire_trail_events(
    window: &web::Window,
    driver: &Rc<RefCell<WebDriver>>,
) -> Vec<EventListener> {
    [
        pointer::wire_mousemove(window, driver),
        pointer::wire_mouseout(window, driver),
        viewport::wire_blur(window, driver),
        viewport::wire_resize(window, driver),
    ]
    .into_iter()
    .flatten()
    .collect()
}
