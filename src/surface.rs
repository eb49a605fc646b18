use ink_core::{CompositeMode, InkSurface, RadialFill, SurfaceSize};
use std::f64::consts::TAU;
use web_sys as web;

/// [`InkSurface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl InkSurface for CanvasSurface {
    fn resize(&mut self, size: SurfaceSize) {
        // Setting the backing size resets the context, so the transform goes last.
        self.canvas.set_width(size.physical_width);
        self.canvas.set_height(size.physical_height);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", size.logical_width));
        _ = style.set_property("height", &format!("{}px", size.logical_height));
        let s = size.scale as f64;
        _ = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        _ = self.ctx.set_global_composite_operation(mode.as_str());
    }

    fn fill_radial(&mut self, fill: &RadialFill) {
        let cx = fill.center.x as f64;
        let cy = fill.center.y as f64;
        let r = fill.radius as f64;
        let gradient = match self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r) {
            Ok(g) => g,
            Err(_) => return,
        };
        for stop in &fill.stops {
            _ = gradient.add_color_stop(stop.offset, &stop.css_color());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(cx, cy, r, 0.0, TAU);
        self.ctx.fill();
    }
}
