//! Drawing surface abstraction.
//!
//! The engine only needs four operations from a 2D backend: resize with a
//! pixel-ratio transform, clear, a radial-gradient circle fill and a blend
//! mode switch. The web front-end implements [`InkSurface`] on top of
//! `CanvasRenderingContext2d`; tests and the native replay use
//! [`RecordingSurface`].

use glam::Vec2;

/// Logical viewport size plus the device pixel ratio it is displayed at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Viewport {
    /// DPR values that are not finite or below 1 are treated as 1.
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        let dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Backing-store dimensions derived from a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub logical_width: f32,
    pub logical_height: f32,
    pub physical_width: u32,
    pub physical_height: u32,
    /// Uniform transform applied so draw calls stay in logical pixels.
    pub scale: f32,
}

impl SurfaceSize {
    pub fn from_viewport(viewport: Viewport) -> Self {
        let w_px = (viewport.width * viewport.dpr).round() as u32;
        let h_px = (viewport.height * viewport.dpr).round() as u32;
        Self {
            logical_width: viewport.width,
            logical_height: viewport.height,
            physical_width: w_px.max(1),
            physical_height: h_px.max(1),
            scale: viewport.dpr,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    /// Additive blending; overlapping blobs brighten.
    Lighter,
}

impl CompositeMode {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        }
    }
}

/// A black gradient stop at `offset` (0..=1 along the radius).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub alpha: f32,
}

impl GradientStop {
    pub fn css_color(&self) -> String {
        format!("rgba(0, 0, 0, {})", self.alpha)
    }
}

/// A filled circle shaded by a radial gradient from its centre outward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialFill {
    pub center: Vec2,
    pub radius: f32,
    pub stops: [GradientStop; 3],
}

pub trait InkSurface {
    fn resize(&mut self, size: SurfaceSize);
    fn clear(&mut self, width: f32, height: f32);
    fn set_composite(&mut self, mode: CompositeMode);
    fn fill_radial(&mut self, fill: &RadialFill);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize(SurfaceSize),
    Clear { width: f32, height: f32 },
    Composite(CompositeMode),
    Fill(RadialFill),
}

/// In-memory surface that records every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub size: Option<SurfaceSize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> impl Iterator<Item = &RadialFill> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill(f) => Some(f),
            _ => None,
        })
    }

    pub fn fill_count(&self) -> usize {
        self.fills().count()
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl InkSurface for RecordingSurface {
    fn resize(&mut self, size: SurfaceSize) {
        self.size = Some(size);
        self.commands.push(DrawCommand::Resize(size));
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.commands.push(DrawCommand::Composite(mode));
    }

    fn fill_radial(&mut self, fill: &RadialFill) {
        self.commands.push(DrawCommand::Fill(*fill));
    }
}
