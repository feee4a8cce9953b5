//! Pointer → orb mapping.

use crate::camera::Camera;
use crate::constants::{DEPTH, ORB_MIN_Y};
use crate::orb::Orb;
use glam::{Vec2, Vec3};

/// Size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Pixel coordinates to NDC, y flipped so up is positive.
    #[inline]
    pub fn to_ndc(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new((px / self.width) * 2.0 - 1.0, -(py / self.height) * 2.0 + 1.0)
    }
}

/// Place the orb `DEPTH` units along the pointer ray, never below `ORB_MIN_Y`.
pub fn orb_position_for_pointer(camera: &Camera, viewport: &Viewport, px: f32, py: f32) -> Vec3 {
    let direction = camera.unproject(viewport.to_ndc(px, py)) * DEPTH;
    let mut position = camera.eye - direction;
    position.y = position.y.max(ORB_MIN_Y);
    position
}

/// Tracks pointer state between ticks.
#[derive(Clone, Debug)]
pub struct Interaction {
    viewport: Viewport,
    pointer_active: bool,
}

impl Interaction {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pointer_active: false,
        }
    }

    #[inline]
    pub fn pointer_active(&self) -> bool {
        self.pointer_active
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer_down(&mut self, px: f32, py: f32, camera: &Camera, orb: &mut Orb) {
        self.pointer_active = true;
        orb.position = orb_position_for_pointer(camera, &self.viewport, px, py);
    }

    /// Moves only drag the orb while the button is held.
    pub fn pointer_move(&mut self, px: f32, py: f32, camera: &Camera, orb: &mut Orb) {
        if self.pointer_active {
            orb.position = orb_position_for_pointer(camera, &self.viewport, px, py);
        }
    }

    /// The orb stays where it was released.
    pub fn pointer_up(&mut self) {
        self.pointer_active = false;
    }

    /// Track the new surface size and update the projection.
    pub fn resize(&mut self, width: f32, height: f32, camera: &mut Camera) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = Viewport::new(width, height);
        camera.set_viewport(self.viewport.width, self.viewport.height);
        log::debug!("[resize] {}x{} aspect={:.3}", width, height, self.viewport.aspect());
    }
}
