use crate::surface::Viewport;

/// Input the engine reacts to, already translated from the host's event types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrailEvent {
    /// Pointer position in logical viewport pixels.
    PointerMove { x: f32, y: f32 },
    /// Window-level mouse-out. Only counts as leaving when there is no related
    /// target, i.e. the pointer left the page rather than moved between elements.
    PointerOut { has_related_target: bool },
    /// Window lost focus.
    Blur,
    Resize(Viewport),
}
