//! Perspective camera shared by the kernel and the renderers.

use crate::constants::{camera_target, initial_camera_eye, FAR, NEAR, VIEW_ANGLE_DEGREES};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera framing the logo from the front, slightly above.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: initial_camera_eye(),
            target: camera_target(),
            up: Vec3::Y,
            aspect,
            fovy_radians: VIEW_ANGLE_DEGREES.to_radians(),
            znear: NEAR,
            zfar: FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Screen-aligned right and up vectors in world space.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        (right, right.cross(forward))
    }

    /// Recompute the projection for a new viewport. Zero sizes are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Unproject a normalized device coordinate.
    ///
    /// Returns the unit vector pointing from the far-plane point back at the
    /// eye, so `eye - dir * d` lies `d` units in front of the camera along
    /// the pointer ray.
    pub fn unproject(&self, ndc: Vec2) -> Vec3 {
        let inv = self.view_proj().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let world = far.truncate() / far.w;
        (self.eye - world).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unproject_centre_points_back_along_view_axis() {
        let cam = Camera::new(1.5);
        let dir = cam.unproject(Vec2::ZERO);
        let back = (cam.eye - cam.target).normalize();
        assert!((dir - back).length() < 1e-3, "dir={dir:?} back={back:?}");
    }

    #[test]
    fn set_viewport_ignores_zero() {
        let mut cam = Camera::new(2.0);
        cam.set_viewport(0.0, 100.0);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(300.0, 100.0);
        assert!((cam.aspect - 3.0).abs() < 1e-6);
    }
}
