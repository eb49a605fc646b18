// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use ink_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered_and_positive() {
    assert!(MIN_RADIUS > 0.0 && MIN_RADIUS < MAX_RADIUS);
    assert!(MIN_LIFE > 0.0 && MIN_LIFE < MAX_LIFE);
    assert!(MIN_SPACING > 0.0 && MIN_SPACING < MAX_SPACING);
    assert!(MAX_BLOBS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn head_blobs_are_larger_and_shorter_lived() {
    assert!(HEAD_RADIUS_SCALE > 1.0);
    assert!(HEAD_LIFE_SCALE > 0.0 && HEAD_LIFE_SCALE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_and_pulse_are_gentle() {
    assert!(BASE_SMOOTHING > 0.0 && BASE_SMOOTHING <= 1.0);
    assert!(PULSE_AMPLITUDE > 0.0 && PULSE_AMPLITUDE < 0.1);
    assert!(RADIUS_JITTER >= 0.0 && RADIUS_JITTER < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gradient_fades_outward() {
    assert!(GRADIENT_MID_OFFSET > 0.0 && GRADIENT_MID_OFFSET < 1.0);
    assert!(GRADIENT_CORE_ALPHA > GRADIENT_MID_ALPHA);
    assert!(GRADIENT_MID_ALPHA > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smallest_fresh_blob_is_visible() {
    let smallest = MIN_RADIUS * (1.0 - RADIUS_JITTER);
    assert!(smallest > MIN_VISIBLE_RADIUS);
    assert!(MIN_VISIBLE_ALPHA < 1.0);
}

#[test]
fn overlay_is_fixed_and_input_transparent() {
    let style = |name: &str| {
        CANVAS_STYLE
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    };
    assert_eq!(style("position"), Some("fixed"));
    assert_eq!(style("pointer-events"), Some("none"));
    assert_eq!(style("width"), Some("100vw"));
    assert_eq!(style("height"), Some("100vh"));
    assert_eq!(style("z-index"), Some(OVERLAY_Z_INDEX));
    assert!(CONFIG_ATTR_PREFIX.starts_with("data-"));
    assert!(!CANVAS_ID.is_empty());
}
