use crate::constants::DEFAULT_PIXEL_RATIO;
use crate::input;
use web_sys as web;

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let dpr = if dpr > 0.0 { dpr } else { DEFAULT_PIXEL_RATIO };
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), dpr);
        if canvas.width() != w_px || canvas.height() != h_px {
            canvas.set_width(w_px);
            canvas.set_height(h_px);
        }
    }
}

pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> input::CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    input::CanvasRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
