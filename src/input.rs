use glam::Vec2;

/// The canvas element's box in CSS pixels, as from `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map a client-space pointer position to canvas backing-store pixels.
/// `None` while the canvas has no layout box.
#[inline]
pub fn client_to_backing_px(client: Vec2, rect: CanvasRect, backing: (u32, u32)) -> Option<Vec2> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x_css = client.x - rect.left;
    let y_css = client.y - rect.top;
    let sx = (x_css / rect.width) * backing.0 as f32;
    let sy = (y_css / rect.height) * backing.1 as f32;
    Some(Vec2::new(sx, sy))
}

/// Backing-store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let w_px = (css_width * pixel_ratio) as u32;
    let h_px = (css_height * pixel_ratio) as u32;
    (w_px.max(1), h_px.max(1))
}

/// `PointerEvent.button` value of the primary (left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Only the primary button engages the orb.
#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == PRIMARY_BUTTON
}
