use glam::Vec3;
use rand::Rng;

/// One point mass derived from a sampled logo pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    base_position: Vec3,
    pub mass: f32,
    pub color: Vec3,
    pub alt_color: Vec3,
    pub hit: bool,
}

impl Particle {
    /// Particle at rest on its anchor.
    pub fn at_rest(position: Vec3, mass: f32, alt_color: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            base_position: position,
            mass,
            color: Vec3::ZERO,
            alt_color,
            hit: false,
        }
    }

    /// Rest anchor; fixed for the lifetime of the particle.
    #[inline]
    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    /// Random pop-away kick: x/z in [-5, 5), y in [10, 20).
    pub fn explode<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        use crate::constants::{EXPLODE_HORIZONTAL, EXPLODE_UP_MAX, EXPLODE_UP_MIN};
        self.velocity = Vec3::new(
            rng.gen_range(-EXPLODE_HORIZONTAL..EXPLODE_HORIZONTAL),
            rng.gen_range(EXPLODE_UP_MIN..EXPLODE_UP_MAX),
            rng.gen_range(-EXPLODE_HORIZONTAL..EXPLODE_HORIZONTAL),
        );
    }

    /// Colour for the active palette.
    #[inline]
    pub fn display_color(&self, inverted: bool) -> Vec3 {
        if inverted {
            self.alt_color
        } else {
            self.color
        }
    }
}

/// Fixed-size, ordered particle list. Built once at setup, never resized.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the fields; the length stays fixed.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn write_positions(&self, out: &mut Vec<[f32; 3]>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| p.position.to_array()));
    }

    pub fn write_colors(&self, inverted: bool, out: &mut Vec<[f32; 3]>) {
        out.clear();
        out.extend(
            self.particles
                .iter()
                .map(|p| p.display_color(inverted).to_array()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn explode_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::at_rest(Vec3::ZERO, 1.5, Vec3::ONE);
        for _ in 0..500 {
            p.explode(&mut rng);
            assert!((-5.0..5.0).contains(&p.velocity.x));
            assert!((-5.0..5.0).contains(&p.velocity.z));
            assert!((10.0..20.0).contains(&p.velocity.y));
        }
    }

    #[test]
    fn buffers_follow_store_order() {
        let store = ParticleStore::new(vec![
            Particle::at_rest(Vec3::new(1.0, 2.0, 3.0), 1.0, Vec3::new(0.1, 0.2, 0.9)),
            Particle::at_rest(Vec3::new(4.0, 5.0, 6.0), 1.0, Vec3::new(0.3, 0.4, 0.7)),
        ]);
        let mut positions = Vec::new();
        store.write_positions(&mut positions);
        assert_eq!(positions, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

        let mut colors = Vec::new();
        store.write_colors(false, &mut colors);
        assert_eq!(colors, vec![[0.0; 3], [0.0; 3]]);
        store.write_colors(true, &mut colors);
        assert_eq!(colors[1], [0.3, 0.4, 0.7]);
    }
}
