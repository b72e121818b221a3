use crate::constants::*;
use glam::{Mat4, Vec3};

/// Orthographic camera looking down onto the ridge field.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            left: CAMERA_LEFT,
            right: CAMERA_RIGHT,
            top: CAMERA_TOP,
            bottom: CAMERA_BOTTOM,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl OrthoCamera {
    /// Clip-space projection (wgpu depth range 0..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.znear,
            self.zfar,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
