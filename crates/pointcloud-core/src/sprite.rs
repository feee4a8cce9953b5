//! GPU-facing data produced by the kernel each frame.

use crate::camera::Camera;

/// Per-instance data for the sprite pipeline (particles and the orb).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    /// 0 = soft particle, 1 = solid sphere.
    pub shape: f32,
    pub _pad: [f32; 3],
}

/// Camera uniform shared by both frontends.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
}

impl SceneUniforms {
    /// View-projection plus the world-space axes sprites are expanded along.
    pub fn from_camera(camera: &Camera) -> Self {
        let (right, up) = camera.billboard_axes();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Additive,
}

/// Everything that changes with the inverted colour mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub inverted: bool,
    pub clear_color: [f64; 4],
    pub particle_blend: BlendMode,
    pub orb_color: [f32; 4],
}

impl Palette {
    pub fn for_mode(inverted: bool) -> Self {
        let background = if inverted { 0.0 } else { 1.0 };
        let orb = if inverted { 1.0 } else { 0.0 };
        Self {
            inverted,
            clear_color: [background, background, background, 1.0],
            particle_blend: if inverted {
                BlendMode::Additive
            } else {
                BlendMode::Normal
            },
            orb_color: [orb, orb, orb, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_shader_stride() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 48);
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 96);
    }

    #[test]
    fn inverted_palette_flips_background_and_orb() {
        let normal = Palette::for_mode(false);
        let inverted = Palette::for_mode(true);
        assert_eq!(normal.clear_color[0], 1.0);
        assert_eq!(inverted.clear_color[0], 0.0);
        assert_eq!(normal.orb_color[0], 0.0);
        assert_eq!(inverted.orb_color[0], 1.0);
        assert_eq!(normal.particle_blend, BlendMode::Normal);
        assert_eq!(inverted.particle_blend, BlendMode::Additive);
    }
}
