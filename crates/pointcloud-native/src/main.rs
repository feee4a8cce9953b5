use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use pointcloud_core::{
    action_for_key, controls, Bitmap, FrameClock, Interaction, KeyAction, Palette, SampleGrid,
    SceneUniforms, SimParams, Simulation, SpriteInstance, StartupError, Viewport, IMAGE_HEIGHT,
    IMAGE_WIDTH,
};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod gpu;

use gpu::GpuState;

const TITLE: &str = "Point Cloud Logo";

fn load_logo() -> anyhow::Result<Bitmap> {
    let logo = match std::env::args().nth(1) {
        Some(path) => {
            Bitmap::open(&path).with_context(|| format!("loading logo from {path}"))?
        }
        None => {
            log::info!("[logo] no path given, using built-in shield");
            Bitmap::shield(IMAGE_WIDTH, IMAGE_HEIGHT)
        }
    };
    Ok(logo.onto_canvas(IMAGE_WIDTH, IMAGE_HEIGHT))
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(c) => Some(c.as_str()),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        _ => None,
    }
}

fn window_title(params: &SimParams, show_params: bool) -> String {
    if show_params {
        format!("{TITLE} | {params}")
    } else {
        TITLE.to_string()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let logo = load_logo()?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let size = window.inner_size();
    let viewport = Viewport::new(size.width.max(1) as f32, size.height.max(1) as f32);
    let mut params = SimParams::default();
    let mut sim = Simulation::from_bitmap(
        &logo,
        SampleGrid::default(),
        &params,
        viewport.aspect(),
        seed(),
    );

    let mut state = match pollster::block_on(GpuState::new(&window, sim.particles().len() + 1)) {
        Ok(state) => state,
        Err(err) => {
            if let Some(startup) = err.downcast_ref::<StartupError>() {
                log::error!("{}", startup.user_message());
            }
            return Err(err);
        }
    };

    let mut interaction = Interaction::new(viewport);
    let mut clock = FrameClock::default();
    let mut last_frame = Instant::now();
    let mut cursor = (0.0f32, 0.0f32);
    let mut show_params = true;
    let mut instances: Vec<SpriteInstance> = Vec::new();
    window.set_title(&window_title(&params, show_params));

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                interaction.resize(size.width as f32, size.height as f32, sim.camera_mut());
                state.resize(size);
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = (position.x as f32, position.y as f32);
                let (camera, orb) = sim.camera_and_orb_mut();
                interaction.pointer_move(cursor.0, cursor.1, camera, orb);
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => {
                    let (camera, orb) = sim.camera_and_orb_mut();
                    interaction.pointer_down(cursor.0, cursor.1, camera, orb);
                }
                ElementState::Released => interaction.pointer_up(),
            },
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if logical_key == Key::Named(NamedKey::Escape) {
                    elwt.exit();
                    return;
                }
                match key_name(&logical_key).and_then(action_for_key) {
                    Some(KeyAction::ToggleOverlay) => {
                        show_params = !show_params;
                        state.window.set_title(&window_title(&params, show_params));
                    }
                    Some(action) => {
                        if controls::apply(&mut params, action) {
                            log::debug!("[params] {params}");
                            state.window.set_title(&window_title(&params, show_params));
                        }
                    }
                    None => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let steps = clock.advance(now - last_frame);
            last_frame = now;
            for _ in 0..steps {
                sim.tick(&params, interaction.pointer_active());
            }

            let palette = Palette::for_mode(params.inverted_colors);
            sim.write_instances(&palette, &mut instances);
            let uniforms = SceneUniforms::from_camera(sim.camera());
            match state.render(&uniforms, &instances, &palette) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(err) => log::warn!("[render] {err}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_failure_reaches_the_fallback_message() {
        let probe: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "cannot create surface",
        ));
        let err = anyhow::Error::from(pointcloud_core::require_graphics(probe).unwrap_err());
        let startup = err.downcast_ref::<StartupError>().unwrap();
        assert_eq!(startup.user_message(), pointcloud_core::UNSUPPORTED_MESSAGE);
        assert!(err.to_string().contains("cannot create surface"));
    }

    #[test]
    fn arrow_keys_map_to_dom_names() {
        assert_eq!(key_name(&Key::Named(NamedKey::ArrowLeft)), Some("ArrowLeft"));
        assert_eq!(key_name(&Key::Named(NamedKey::Escape)), None);
    }
}
