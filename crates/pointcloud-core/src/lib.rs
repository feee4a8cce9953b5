pub mod bitmap;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod controls;
pub mod error;
pub mod interaction;
pub mod kernel;
pub mod orb;
pub mod params;
pub mod particle;
#[cfg(feature = "gpu")]
pub mod renderer;
pub mod sampler;
pub mod simulation;
pub mod sprite;
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");

pub use bitmap::Bitmap;
pub use camera::Camera;
pub use clock::FrameClock;
pub use constants::*;
pub use controls::{action_for_key, KeyAction};
pub use error::{require_graphics, BitmapError, StartupError, UNSUPPORTED_MESSAGE};
pub use interaction::{Interaction, Viewport};
pub use orb::Orb;
pub use params::{Control, ControlSpec, SimParams};
pub use particle::{Particle, ParticleStore};
#[cfg(feature = "gpu")]
pub use renderer::SpriteRenderer;
pub use sampler::SampleGrid;
pub use simulation::Simulation;
pub use sprite::{BlendMode, Palette, SceneUniforms, SpriteInstance};
