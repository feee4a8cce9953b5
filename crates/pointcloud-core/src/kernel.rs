//! Per-particle force and integration stages.
//!
//! One tick runs the stages in order for every particle:
//! orb force/capture (or release + gravity), spring, mode transition,
//! Euler integration with a unit timestep, then floor collision.

use crate::constants::{
    CAPTURE_DAMPING, FLOOR, FLOOR_FRICTION, FLOOR_RESTITUTION, GRAVITY, ORB_FORCE_FALLOFF,
    RELEASE_DAMPING, SPRING_DAMPEN_SCALE, SPRING_STRENGTH_SCALE,
};
use crate::orb::Orb;
use crate::params::SimParams;
use crate::particle::Particle;
use glam::Vec3;
use rand::Rng;

/// Change of spring mode detected at the start of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpringTransition {
    /// Spring mode switched on: particles stop dead.
    Engaged,
    /// Spring mode switched off: particles pop away.
    Released,
}

impl SpringTransition {
    pub fn detect(previous: bool, current: bool) -> Option<Self> {
        match (previous, current) {
            (false, true) => Some(SpringTransition::Engaged),
            (true, false) => Some(SpringTransition::Released),
            _ => None,
        }
    }
}

/// Orb state frozen for the duration of one tick.
#[derive(Clone, Copy, Debug)]
pub struct OrbField {
    pub position: Vec3,
    pub influence: f32,
    pub radius_sq: f32,
    /// Distance from the orb centre at which captured particles are held.
    pub capture_distance: f32,
}

impl OrbField {
    pub fn from_orb(orb: &Orb) -> Self {
        Self {
            position: orb.position,
            influence: orb.influence(),
            radius_sq: orb.radius_sq(),
            capture_distance: orb.radius() * 2.0,
        }
    }
}

/// Pull toward the orb while the pointer is held and capture anything
/// within twice its radius. Otherwise release captured particles and apply
/// gravity.
///
/// A particle exactly on the orb centre divides by zero and goes NaN.
pub fn apply_orb<R: Rng + ?Sized>(
    particle: &mut Particle,
    field: &OrbField,
    orb_strength: f32,
    pointer_active: bool,
    rng: &mut R,
) {
    let delta = field.position - particle.position;
    let sq_distance = delta.length_squared();
    let direction = delta / sq_distance.sqrt();

    if pointer_active {
        let magnitude =
            (field.influence * orb_strength * particle.mass) / (sq_distance * ORB_FORCE_FALLOFF);
        particle.velocity += direction * magnitude;

        if sq_distance < field.radius_sq * 4.0 {
            particle.hit = true;
            particle.position = field.position - direction * field.capture_distance;
            particle.velocity *= CAPTURE_DAMPING;
        } else {
            particle.hit = false;
        }
    } else {
        if particle.hit {
            particle.hit = false;
            particle.velocity *= RELEASE_DAMPING;
            particle.explode(rng);
        }
        particle.velocity.y += GRAVITY;
    }
}

/// Spring toward the rest anchor, then scale the whole velocity by the
/// dampen factor. The scaling acts as friction while spring mode is on.
pub fn apply_spring(particle: &mut Particle, params: &SimParams) {
    if !params.spring_to_logo {
        return;
    }
    let spring = particle.base_position() - particle.position;
    particle.velocity += spring * (params.spring_strength * SPRING_STRENGTH_SCALE);
    particle.velocity *= params.spring_dampen * SPRING_DAMPEN_SCALE;
}

pub fn apply_transition<R: Rng + ?Sized>(
    particle: &mut Particle,
    transition: Option<SpringTransition>,
    rng: &mut R,
) {
    match transition {
        Some(SpringTransition::Engaged) => particle.velocity = Vec3::ZERO,
        Some(SpringTransition::Released) => particle.explode(rng),
        None => {}
    }
}

/// Explicit Euler with an implicit unit timestep.
#[inline]
pub fn integrate(particle: &mut Particle) {
    particle.position += particle.velocity;
}

/// Clamp to the floor plane, bounce and add friction.
pub fn collide_floor(particle: &mut Particle) {
    if particle.position.y <= FLOOR {
        particle.position.y = FLOOR;
        particle.velocity.y *= FLOOR_RESTITUTION;
        particle.velocity.x *= FLOOR_FRICTION;
        particle.velocity.z *= FLOOR_FRICTION;
    }
}

/// Run every stage for one particle.
pub fn step_particle<R: Rng + ?Sized>(
    particle: &mut Particle,
    field: &OrbField,
    params: &SimParams,
    pointer_active: bool,
    transition: Option<SpringTransition>,
    rng: &mut R,
) {
    apply_orb(particle, field, params.orb_strength, pointer_active, rng);
    apply_spring(particle, params);
    apply_transition(particle, transition, rng);
    integrate(particle);
    collide_floor(particle);
}
