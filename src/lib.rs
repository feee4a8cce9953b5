#![cfg(target_arch = "wasm32")]
use instant::Instant;
use pointcloud_core::{FrameClock, Interaction, SampleGrid, SimParams, Simulation, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod logo;
mod overlay;
mod render;

use constants::{CANVAS_ID, LOGO_URL};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// `navigator.gpu` is the go/no-go signal before any surface is created.
fn has_webgpu(window: &web::Window) -> bool {
    let navigator = window.navigator();
    js_sys::Reflect::get(&navigator, &JsValue::from_str("gpu"))
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pointcloud-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    if !has_webgpu(&window) {
        log::warn!("navigator.gpu missing");
        overlay::show_unsupported(&document);
        return Ok(());
    }

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let logo = logo::load_logo(LOGO_URL).await;
    let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
    let params = SimParams::default();
    let sim = Simulation::from_bitmap(
        &logo,
        SampleGrid::default(),
        &params,
        viewport.aspect(),
        random_seed(),
    );

    let gpu = match render::GpuState::new(&canvas, sim.particles().len() + 1).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            overlay::show_unsupported(&document);
            return Ok(());
        }
    };

    let sim = Rc::new(RefCell::new(sim));
    let params = Rc::new(RefCell::new(params));
    let interaction = Rc::new(RefCell::new(Interaction::new(viewport)));

    overlay::update_params(&document, &params.borrow());
    events::wire_global_keydown(params.clone(), document.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        sim: sim.clone(),
        interaction: interaction.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        params,
        interaction,
        canvas,
        gpu,
        clock: FrameClock::default(),
        last_instant: Instant::now(),
        instances: Vec::new(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
