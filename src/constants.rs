//! Page wiring for the web front-end. Simulation constants live in
//! `pointcloud_core::constants`.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const PARAMS_OVERLAY_ID: &str = "params-overlay";
pub const UNSUPPORTED_ID: &str = "unsupported";

/// Logo fetched at startup, relative to the page.
pub const LOGO_URL: &str = "images/logo.png";

// Fallback when the page reports a zero or missing devicePixelRatio
pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;
