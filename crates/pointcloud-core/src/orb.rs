use crate::constants::{INFLUENCE_DECAY_RATE, INFLUENCE_GROW_RATE, ORB_RADIUS, RESTING_INFLUENCE};
use glam::Vec3;

/// The pointer-driven collider.
///
/// `influence` scales both the drawn sphere and the interaction radius. It
/// only ever eases toward 1 or toward `RESTING_INFLUENCE`, so it stays > 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
    pub position: Vec3,
    influence: f32,
}

impl Default for Orb {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            influence: RESTING_INFLUENCE,
        }
    }
}

impl Orb {
    #[inline]
    pub fn influence(&self) -> f32 {
        self.influence
    }

    /// Fast grow while held, slower settle back once released.
    pub fn ease(&mut self, active: bool) {
        if active {
            self.influence += (1.0 - self.influence) * INFLUENCE_GROW_RATE;
        } else {
            self.influence += (RESTING_INFLUENCE - self.influence) * INFLUENCE_DECAY_RATE;
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        ORB_RADIUS * self.influence
    }

    #[inline]
    pub fn radius_sq(&self) -> f32 {
        let r = self.radius();
        r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_toward_one_while_active() {
        let mut orb = Orb::default();
        let mut prev = orb.influence();
        for _ in 0..200 {
            orb.ease(true);
            assert!(orb.influence() > prev);
            assert!(orb.influence() < 1.0);
            prev = orb.influence();
        }
        assert!(orb.influence() > 0.99);
    }

    #[test]
    fn radius_tracks_influence() {
        let mut orb = Orb::default();
        for _ in 0..10 {
            orb.ease(true);
        }
        assert!((orb.radius() - ORB_RADIUS * orb.influence()).abs() < 1e-5);
        assert!((orb.radius_sq() - orb.radius() * orb.radius()).abs() < 1e-3);
    }
}
