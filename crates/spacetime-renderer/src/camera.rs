//! Fixed perspective view looking down onto the orbital plane

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _padding: f32,
}

/// Look-at camera placed `distance` away from `target`, raised `elevation`
/// radians above the plane on the +Z side
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    pub elevation: f32,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 60.0,
            elevation: 0.9,
            aspect: width as f32 / height.max(1) as f32,
            fovy: 45.0_f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Eye position; elevation is kept short of straight down so Y stays a valid up vector
    pub fn eye(&self) -> Vec3 {
        let elevation = self.elevation.clamp(0.0, 1.5);
        self.target + Vec3::new(0.0, elevation.sin(), elevation.cos()) * self.distance
    }

    pub fn view_projection(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            position: self.eye().to_array(),
            _padding: 0.0,
        }
    }
}
