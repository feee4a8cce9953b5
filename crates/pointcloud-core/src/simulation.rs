use crate::bitmap::Bitmap;
use crate::camera::Camera;
use crate::constants::{CAMERA_PHASE_RATE, DEPTH, PARTICLE_SIZE};
use crate::kernel::{step_particle, OrbField, SpringTransition};
use crate::orb::Orb;
use crate::params::SimParams;
use crate::particle::ParticleStore;
use crate::sampler::{spawn_particles, SampleGrid};
use crate::sprite::{Palette, SpriteInstance};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Particle store, orb and camera orbit advanced together once per tick.
pub struct Simulation {
    store: ParticleStore,
    orb: Orb,
    camera: Camera,
    camera_phase: f32,
    previous_spring: bool,
    rng: StdRng,
}

impl Simulation {
    /// `params` seeds the previous-frame spring flag so the first tick does
    /// not register a mode change.
    pub fn new(store: ParticleStore, params: &SimParams, aspect: f32, seed: u64) -> Self {
        Self {
            store,
            orb: Orb::default(),
            camera: Camera::new(aspect),
            camera_phase: 0.0,
            previous_spring: params.spring_to_logo,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sample `bitmap` and build the simulation. Masses come from the same
    /// seeded generator as the explode impulses.
    pub fn from_bitmap(
        bitmap: &Bitmap,
        grid: SampleGrid,
        params: &SimParams,
        aspect: f32,
        seed: u64,
    ) -> Self {
        let mut sim = Self::new(ParticleStore::default(), params, aspect, seed);
        sim.store = spawn_particles(bitmap, grid, &mut sim.rng);
        log::info!("[sim] {} particles", sim.store.len());
        sim
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.store
    }

    pub fn orb(&self) -> &Orb {
        &self.orb
    }

    pub fn orb_mut(&mut self) -> &mut Orb {
        &mut self.orb
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Split borrow for the interaction controller.
    pub fn camera_and_orb_mut(&mut self) -> (&mut Camera, &mut Orb) {
        (&mut self.camera, &mut self.orb)
    }

    pub fn camera_phase(&self) -> f32 {
        self.camera_phase
    }

    /// Advance one frame.
    pub fn tick(&mut self, params: &SimParams, pointer_active: bool) {
        self.orb.ease(pointer_active);
        let field = OrbField::from_orb(&self.orb);

        // Compared against last tick's flag, so a toggle lands one tick later.
        let transition = SpringTransition::detect(self.previous_spring, params.spring_to_logo);
        if let Some(t) = transition {
            log::info!("[sim] spring mode {:?}", t);
        }

        for particle in self.store.particles_mut() {
            step_particle(
                particle,
                &field,
                params,
                pointer_active,
                transition,
                &mut self.rng,
            );
        }

        self.camera_phase += params.camera_speed * CAMERA_PHASE_RATE;
        self.camera.eye.x = self.camera_phase.sin() * DEPTH;
        self.camera.eye.z = self.camera_phase.cos() * DEPTH;

        self.previous_spring = params.spring_to_logo;
    }

    /// Bare particle positions in store order.
    pub fn write_positions(&self, out: &mut Vec<[f32; 3]>) {
        self.store.write_positions(out);
    }

    /// Particles in store order followed by the orb.
    pub fn write_instances(&self, palette: &Palette, out: &mut Vec<SpriteInstance>) {
        out.clear();
        out.reserve(self.store.len() + 1);
        out.extend(self.store.particles().iter().map(|p| {
            let c = p.display_color(palette.inverted);
            SpriteInstance {
                position: p.position.to_array(),
                size: PARTICLE_SIZE,
                color: [c.x, c.y, c.z, 1.0],
                shape: 0.0,
                _pad: [0.0; 3],
            }
        }));
        out.push(SpriteInstance {
            position: self.orb.position.to_array(),
            size: self.orb.radius() * 2.0,
            color: palette.orb_color,
            shape: 1.0,
            _pad: [0.0; 3],
        });
    }
}
