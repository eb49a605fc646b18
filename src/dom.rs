use crate::constants::{CANVAS_ID, CANVAS_STYLE, CONFIG_ATTR_PREFIX};
use ink_core::{TrailParams, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current logical viewport and device pixel ratio of `window`.
pub fn viewport_of(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
    )
}

/// Create the overlay canvas and append it to `body`.
pub fn create_overlay_canvas(
    document: &web::Document,
    body: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("aria-hidden", "true");
    let style = canvas.style();
    for (name, value) in CANVAS_STYLE {
        _ = style.set_property(name, value);
    }
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// `data-ink-*` overrides present on `element`, keyed without the prefix.
pub fn ink_attributes(element: &web::Element) -> Vec<(&'static str, String)> {
    TrailParams::KEYS
        .iter()
        .filter_map(|key| {
            element
                .get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key))
                .map(|value| (*key, value))
        })
        .collect()
}
