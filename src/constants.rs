// DOM-side constants for the overlay canvas.

pub const CANVAS_ID: &str = "ink-cursor";

// Overrides are read from `<body data-ink-{key}="...">`
pub const CONFIG_ATTR_PREFIX: &str = "data-ink-";

pub const OVERLAY_Z_INDEX: &str = "9999"; // above all page content

// Full-viewport, input-transparent overlay
pub const CANVAS_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100vw"),
    ("height", "100vh"),
    ("pointer-events", "none"),
    ("z-index", OVERLAY_Z_INDEX),
];
