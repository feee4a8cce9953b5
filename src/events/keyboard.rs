use crate::overlay;
use pointcloud_core::{action_for_key, controls, KeyAction, SimParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    params: &Rc<RefCell<SimParams>>,
    document: &web::Document,
) {
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    match action {
        KeyAction::ToggleOverlay => overlay::toggle(document),
        action => {
            let changed = controls::apply(&mut params.borrow_mut(), action);
            if changed {
                let current = *params.borrow();
                log::debug!("[keys] {}", current);
                overlay::update_params(document, &current);
            }
        }
    }
    // Arrow keys would otherwise scroll the page
    if key.starts_with("Arrow") {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(params: Rc<RefCell<SimParams>>, document: web::Document) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &params, &document);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
