#![cfg(target_arch = "wasm32")]
use ink_core::{TrailDriver, TrailEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod surface;

pub(crate) type WebDriver = TrailDriver<surface::CanvasSurface, frame::RafScheduler>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ink-cursor loaded");
    Ok(())
}

struct Mounted {
    canvas: web::HtmlCanvasElement,
    driver: Rc<RefCell<WebDriver>>,
    frame_callback: frame::FrameCallback,
    listeners: Vec<events::EventListener>,
}

/// The decorative ink trail overlay. Construct it once the page is ready and
/// call `destroy()` when the page unmounts. If the browser cannot provide a
/// 2D canvas the instance stays inert.
#[wasm_bindgen]
pub struct InkCursor {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl InkCursor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> InkCursor {
        let mounted = match mount() {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!("[ink] effect disabled: {:#}", e);
                None
            }
        };
        InkCursor { mounted }
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.driver.borrow().is_running())
            .unwrap_or(false)
    }

    /// Cancel the pending frame, detach listeners and remove the canvas.
    pub fn destroy(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.driver.borrow_mut().teardown();
            drop(m.listeners);
            m.frame_callback.borrow_mut().take();
            m.canvas.remove();
        }
    }
}

impl Default for InkCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InkCursor {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn mount() -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;

    let overrides = dom::ink_attributes(&body);
    let params = config::resolve_params(overrides.iter().map(|(k, v)| (*k, v.as_str())));

    let canvas = dom::create_overlay_canvas(&document, &body)?;
    let ctx = match dom::context_2d(&canvas) {
        Ok(ctx) => ctx,
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };

    let viewport = dom::viewport_of(&window);
    log::info!(
        "[ink] mount {}x{} dpr={} max_blobs={}",
        viewport.width,
        viewport.height,
        viewport.dpr,
        params.max_blobs
    );
    let engine = TrailEngine::new(params, viewport, rand::random());

    let frame_callback: frame::FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = frame::RafScheduler::new(window.clone(), frame_callback.clone());
    let driver = Rc::new(RefCell::new(TrailDriver::new(
        engine,
        surface::CanvasSurface::new(canvas.clone(), ctx),
        scheduler,
    )));

    let listeners = events::wire_trail_events(&window, &driver);
    frame::start_loop(&driver, &frame_callback, frame::FrameClock::new());

    Ok(Mounted {
        canvas,
        driver,
        frame_callback,
        listeners,
    })
}
