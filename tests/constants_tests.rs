// Host-side tests for the page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, PARAMS_OVERLAY_ID, UNSUPPORTED_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "id {a:?} must be a single token");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn logo_url_is_relative_png() {
    assert!(!LOGO_URL.starts_with('/'));
    assert!(LOGO_URL.ends_with(".png"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_pixel_ratio_is_positive() {
    assert!(DEFAULT_PIXEL_RATIO > 0.0);
}
