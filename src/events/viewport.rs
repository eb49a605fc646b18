use super::EventListener;
use crate::dom;
use crate::WebDriver;
use ink_core::TrailEvent;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_blur(
    window: &web::Window,
    driver: &Rc<RefCell<WebDriver>>,
) -> Option<EventListener> {
    let driver = driver.clone();
    EventListener::new(window, "blur", move |_ev: web::Event| {
        driver.borrow_mut().handle(TrailEvent::Blur);
    })
}

pub fn wire_resize(
    window: &web::Window,
    driver: &Rc<RefCell<WebDriver>>,
) -> Option<EventListener> {
    let driver = driver.clone();
    let window_for_size = window.clone();
    EventListener::new(window, "resize", move |_ev: web::Event| {
        let viewport = dom::viewport_of(&window_for_size);
        log::info!(
            "[resize] {}x{} dpr={}",
            viewport.width,
            viewport.height,
            viewport.dpr
        );
        driver.borrow_mut().handle(TrailEvent::Resize(viewport));
    })
}
