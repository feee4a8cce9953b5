use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Scene layout
pub const DEPTH: f32 = 900.0; // camera orbit radius and orb projection distance
pub const CAMERA_HEIGHT: f32 = 160.0;
pub const CAMERA_TARGET_HEIGHT: f32 = 100.0;
pub const VIEW_ANGLE_DEGREES: f32 = 60.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 3000.0;
pub const CAMERA_PHASE_RATE: f32 = 0.004; // radians per tick per unit of camera speed

// Logo sampling
pub const IMAGE_WIDTH: u32 = 500;
pub const IMAGE_HEIGHT: u32 = 500;
pub const STEP_X: u32 = 5;
pub const STEP_Y: u32 = 5;

// Physics
pub const FLOOR: f32 = -200.0;
pub const GRAVITY: f32 = -0.6;
pub const FLOOR_RESTITUTION: f32 = -0.3; // applied to y velocity on floor contact
pub const FLOOR_FRICTION: f32 = 0.55; // applied to x/z velocity on floor contact
pub const SPRING_STRENGTH_SCALE: f32 = 0.01;
pub const SPRING_DAMPEN_SCALE: f32 = 0.1;

// Orb
pub const ORB_RADIUS: f32 = 60.0;
pub const ORB_MIN_Y: f32 = -140.0; // orb cannot be dragged below this plane
pub const RESTING_INFLUENCE: f32 = 0.001;
pub const INFLUENCE_GROW_RATE: f32 = 0.07;
pub const INFLUENCE_DECAY_RATE: f32 = 0.3;
pub const ORB_FORCE_FALLOFF: f32 = 0.05; // multiplies squared distance in the force denominator
pub const CAPTURE_DAMPING: f32 = 0.7;
pub const RELEASE_DAMPING: f32 = -0.55;

// Explode impulse ranges
pub const EXPLODE_HORIZONTAL: f32 = 5.0; // x/z drawn from [-5, 5)
pub const EXPLODE_UP_MIN: f32 = 10.0;
pub const EXPLODE_UP_MAX: f32 = 20.0;

// Visual sizing
pub const PARTICLE_SIZE: f32 = 8.0; // world-space sprite diameter, slightly over the sampling stride

// Frame pacing
pub const TICKS_PER_SECOND: f32 = 60.0;
pub const MAX_STEPS_PER_FRAME: u32 = 4;

#[inline]
pub fn initial_camera_eye() -> Vec3 {
    Vec3::new(0.0, CAMERA_HEIGHT, DEPTH)
}

#[inline]
pub fn camera_target() -> Vec3 {
    Vec3::new(0.0, CAMERA_TARGET_HEIGHT, 0.0)
}
