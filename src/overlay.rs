use crate::constants::{CANVAS_ID, PARAMS_OVERLAY_ID, UNSUPPORTED_ID};
use pointcloud_core::{SimParams, UNSUPPORTED_MESSAGE};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PARAMS_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PARAMS_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(PARAMS_OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Render the tunables panel from the current values.
pub fn update_params(document: &web::Document, params: &SimParams) {
    if let Some(el) = document.get_element_by_id(PARAMS_OVERLAY_ID) {
        let rows: String = params
            .summary()
            .into_iter()
            .map(|(label, value)| format!("<div>{}: <b>{}</b></div>", label, value))
            .collect();
        let html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{}<div style='opacity: 0.6; margin-top: 6px;'>m i q/w a/s z/x ←/→ 0 h</div></div>",
            rows
        );
        el.set_inner_html(&html);
    }
}

/// Replace the scene with the fallback message.
pub fn show_unsupported(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(UNSUPPORTED_ID) {
        el.set_text_content(Some(UNSUPPORTED_MESSAGE));
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
    if let Some(canvas) = document.get_element_by_id(CANVAS_ID) {
        _ = canvas.set_attribute("style", "display:none");
    }
    hide(document);
}
