//! Turns a logo bitmap into the initial particle set.

use crate::bitmap::Bitmap;
use crate::constants::{STEP_X, STEP_Y};
use crate::particle::{Particle, ParticleStore};
use glam::Vec3;
use rand::Rng;

/// Sampling stride in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleGrid {
    pub step_x: u32,
    pub step_y: u32,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            step_x: STEP_X,
            step_y: STEP_Y,
        }
    }
}

/// Grid coordinates with non-zero alpha, x outer and y inner.
pub fn sample_points(bitmap: &Bitmap, grid: SampleGrid) -> Vec<(u32, u32)> {
    let step_x = grid.step_x.max(1) as usize;
    let step_y = grid.step_y.max(1) as usize;
    let mut points = Vec::new();
    for x in (0..bitmap.width()).step_by(step_x) {
        for y in (0..bitmap.height()).step_by(step_y) {
            if bitmap.alpha(x, y) > 0 {
                points.push((x, y));
            }
        }
    }
    points
}

/// Build one particle per sampled pixel.
///
/// Positions are centred horizontally on the image; `alt_color` is a
/// gradient keyed to the pixel's location.
pub fn spawn_particles<R: Rng + ?Sized>(
    bitmap: &Bitmap,
    grid: SampleGrid,
    rng: &mut R,
) -> ParticleStore {
    let w = bitmap.width() as f32;
    let h = bitmap.height() as f32;
    let particles = sample_points(bitmap, grid)
        .into_iter()
        .map(|(x, y)| {
            let (fx, fy) = (x as f32, y as f32);
            let position = Vec3::new(fx - w * 0.5, fy, 0.0);
            let alt_color = Vec3::new(fx / w, fy / h, 1.0 - fx / w);
            Particle::at_rest(position, 1.0 + rng.gen::<f32>(), alt_color)
        })
        .collect::<Vec<_>>();
    log::debug!(
        "[sampler] {} particles from {}x{} bitmap (stride {}x{})",
        particles.len(),
        bitmap.width(),
        bitmap.height(),
        grid.step_x,
        grid.step_y
    );
    ParticleStore::new(particles)
}
