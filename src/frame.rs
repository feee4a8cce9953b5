use crate::render;
use instant::Instant;
use pointcloud_core::{
    FrameClock, Interaction, Palette, SceneUniforms, SimParams, Simulation, SpriteInstance,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub params: Rc<RefCell<SimParams>>,
    pub interaction: Rc<RefCell<Interaction>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub clock: FrameClock,
    pub last_instant: Instant,
    pub instances: Vec<SpriteInstance>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.sync_viewport();

        let params = *self.params.borrow();
        let pointer_active = self.interaction.borrow().pointer_active();
        let steps = self.clock.advance(dt);
        let mut sim = self.sim.borrow_mut();
        for _ in 0..steps {
            sim.tick(&params, pointer_active);
        }

        let palette = Palette::for_mode(params.inverted_colors);
        sim.write_instances(&palette, &mut self.instances);
        let uniforms = SceneUniforms::from_camera(sim.camera());
        drop(sim);

        match self.gpu.render(&uniforms, &self.instances, &palette) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    /// Follow canvas backing-size changes into the camera and surface.
    fn sync_viewport(&mut self) {
        let w = self.canvas.width();
        let h = self.canvas.height();
        let viewport = self.interaction.borrow().viewport();
        if viewport.width as u32 != w || viewport.height as u32 != h {
            let mut sim = self.sim.borrow_mut();
            self.interaction
                .borrow_mut()
                .resize(w as f32, h as f32, sim.camera_mut());
        }
        self.gpu.resize_if_needed(w, h);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
