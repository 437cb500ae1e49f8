//! Everything one frame draws, built from a read-only view of the bodies

use glam::{DVec2, Vec3};
use gravity_physics::Body;

use crate::camera::{Camera, CameraUniform};
use crate::mesh::SpacetimeMesh;
use crate::palette;
use crate::vertex::{to_world, LineVertex};

/// Segments used for body discs unless overridden
pub const DISC_SEGMENTS: u32 = 32;

/// Filled circle for one body, as a triangle list in the orbital plane
pub fn body_disc(body: &Body, segments: u32) -> Vec<LineVertex> {
    let segments = segments.max(3);
    let [r, g, b] = body.color();
    let color = [r, g, b, 1.0];
    let center = to_world(body.pos, 0.0);
    let radius = body.radius();

    let rim = |k: u32| {
        let angle = k as f32 / segments as f32 * std::f32::consts::TAU;
        center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
    };

    (0..segments)
        .flat_map(|k| [center, rim(k), rim(k + 1)])
        .map(|p| LineVertex::new(p, color))
        .collect()
}

/// Line strip through a body's trail, fading in from oldest to newest
pub fn trail_strip(body: &Body) -> Vec<LineVertex> {
    let trail = body.trail();
    let len = trail.len();
    let [r, g, b] = body.color();

    trail
        .iter()
        .enumerate()
        .map(|(i, &p): (usize, &DVec2)| {
            let alpha = (i + 1) as f32 / len as f32;
            LineVertex::new(to_world(p, 0.0), [r, g, b, alpha])
        })
        .collect()
}

/// CPU-side geometry for a single frame, ready for upload
pub struct FrameGeometry {
    pub camera: CameraUniform,
    pub clear_color: [f32; 4],
    /// Warped grid, line list
    pub mesh_lines: Vec<LineVertex>,
    /// All body discs, triangle list
    pub discs: Vec<LineVertex>,
    /// One line strip per body, in body order
    pub trails: Vec<Vec<LineVertex>>,
}

impl FrameGeometry {
    pub fn build(bodies: &[Body], mesh: &SpacetimeMesh, camera: &Camera) -> Self {
        Self {
            camera: camera.to_uniform(),
            clear_color: palette::background(),
            mesh_lines: mesh.build_lines(bodies),
            discs: bodies
                .iter()
                .flat_map(|b| body_disc(b, DISC_SEGMENTS))
                .collect(),
            trails: bodies.iter().map(trail_strip).collect(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh_lines.len()
            + self.discs.len()
            + self.trails.iter().map(Vec::len).sum::<usize>()
    }
}
