use super::EventListener;
use crate::WebDriver;
use ink_core::TrailEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_mousemove(
    window: &web::Window,
    driver: &Rc<RefCell<WebDriver>>,
) -> Option<EventListener> {
    let driver = driver.clone();
    EventListener::new(window, "mousemove", move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            driver.borrow_mut().handle(TrailEvent::PointerMove {
                x: mouse.client_x() as f32,
                y: mouse.client_y() as f32,
            });
        }
    })
}

pub fn wire_mouseout(
    window: &web::Window,
    driver: &Rc<RefCell<WebDriver>>,
) -> Option<EventListener> {
    let driver = driver.clone();
    EventListener::new(window, "mouseout", move |ev: web::Event| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            let has_related_target = mouse.related_target().is_some();
            if !has_related_target {
                log::debug!("[mouse] left window");
            }
            driver
                .borrow_mut()
                .handle(TrailEvent::PointerOut { has_related_target });
        }
    })
}
