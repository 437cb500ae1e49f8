//! Vertex layouts shared by every draw call

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, Vec3};

/// Colored vertex for lines, line strips and triangle lists
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Lift a point of the orbital plane into world space
///
/// The plane maps onto world X/Z with Y up, so `height` is the vertical offset.
pub fn to_world(point: DVec2, height: f32) -> Vec3 {
    Vec3::new(point.x as f32, height, point.y as f32)
}
