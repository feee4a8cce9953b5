use crate::dom;
use crate::input;
use glam::Vec2;
use pointcloud_core::{Interaction, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
    pub interaction: Rc<RefCell<Interaction>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_selectstart(&w.canvas);
}

#[inline]
fn pointer_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    input::client_to_backing_px(
        client,
        dom::canvas_rect(canvas),
        (canvas.width(), canvas.height()),
    )
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.interaction.borrow().pointer_active() {
            return;
        }
        let Some(pos) = pointer_px(&ev, &w.canvas) else {
            return;
        };
        let mut sim = w.sim.borrow_mut();
        let (camera, orb) = sim.camera_and_orb_mut();
        w.interaction
            .borrow_mut()
            .pointer_move(pos.x, pos.y, camera, orb);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(ev.button()) {
            return;
        }
        if let Some(pos) = pointer_px(&ev, &w.canvas) {
            let mut sim = w.sim.borrow_mut();
            let (camera, orb) = sim.camera_and_orb_mut();
            w.interaction
                .borrow_mut()
                .pointer_down(pos.x, pos.y, camera, orb);
            log::debug!("[pointer] down at ({:.0}, {:.0})", pos.x, pos.y);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // pointercancel reports button -1 and must still release the orb
        if ev.type_() == "pointerup" && !input::is_primary_button(ev.button()) {
            return;
        }
        w.interaction.borrow_mut().pointer_up();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

// Dragging across the page must not start a text selection
fn wire_selectstart(canvas: &web::HtmlCanvasElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("selectstart", closure.as_ref().unchecked_ref());
    closure.forget();
}
