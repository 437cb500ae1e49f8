//! Warped background grid
//!
//! Purely cosmetic: each grid point sinks by `Σ mass / (k1 + k2 * distance)`
//! over all bodies, so heavy bodies sit in visible wells.

use glam::DVec2;
use gravity_physics::Body;

use crate::palette;
use crate::vertex::{to_world, LineVertex};

/// Square grid centered on the origin of the orbital plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacetimeMesh {
    /// Half the side length of the grid
    pub half_extent: f32,
    /// Cells per side
    pub divisions: u32,
    /// Height of the undisturbed grid
    pub baseline: f32,
    /// `k1`: caps the depth directly under a body at `mass / k1`
    pub well_offset: f32,
    /// `k2`: how quickly a well flattens out with distance
    pub well_falloff: f32,
}

impl Default for SpacetimeMesh {
    fn default() -> Self {
        Self {
            half_extent: 25.0,
            divisions: 50,
            baseline: -1.0,
            well_offset: 10000.0,
            well_falloff: 2000.0,
        }
    }
}

impl SpacetimeMesh {
    /// Vertical displacement of the grid at `point`, always ≤ 0
    pub fn displacement(&self, point: DVec2, bodies: &[Body]) -> f32 {
        bodies
            .iter()
            .map(|b| {
                let distance = (b.pos - point).length() as f32;
                -(b.mass() as f32) / (self.well_offset + self.well_falloff * distance)
            })
            .sum()
    }

    /// Grid points along one side, from `-half_extent` to `half_extent`
    fn axis(&self) -> Vec<f64> {
        let n = self.divisions.max(1);
        let step = 2.0 * self.half_extent as f64 / n as f64;
        (0..=n)
            .map(|i| -self.half_extent as f64 + i as f64 * step)
            .collect()
    }

    /// Build the grid as a line list, rows first then columns
    pub fn build_lines(&self, bodies: &[Body]) -> Vec<LineVertex> {
        let axis = self.axis();
        let n = axis.len();

        // Sample every grid point once; rows and columns share them
        let heights: Vec<f32> = axis
            .iter()
            .flat_map(|&y| axis.iter().map(move |&x| DVec2::new(x, y)))
            .map(|p| self.displacement(p, bodies))
            .collect();

        let deepest = heights.iter().copied().fold(0.0_f32, f32::min);
        let vertex = |ix: usize, iy: usize| {
            let depth = heights[iy * n + ix];
            let t = if deepest < 0.0 { depth / deepest } else { 0.0 };
            let color = palette::mix(palette::grid_flat(), palette::grid_deep(), t);
            LineVertex::new(
                to_world(DVec2::new(axis[ix], axis[iy]), self.baseline + depth),
                color,
            )
        };

        let mut lines = Vec::with_capacity(4 * n * (n - 1));
        for iy in 0..n {
            for ix in 0..n - 1 {
                lines.push(vertex(ix, iy));
                lines.push(vertex(ix + 1, iy));
            }
        }
        for ix in 0..n {
            for iy in 0..n - 1 {
                lines.push(vertex(ix, iy));
                lines.push(vertex(ix, iy + 1));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f64, y: f64, mass: f64) -> Body {
        Body::new(DVec2::new(x, y), DVec2::ZERO, mass, 1.0, [1.0; 3])
    }

    #[test]
    fn test_displacement_formula() {
        let mesh = SpacetimeMesh::default();
        let bodies = vec![body_at(0.0, 0.0, 50000.0)];

        assert_eq!(mesh.displacement(DVec2::ZERO, &bodies), -5.0);
        let at_ten = mesh.displacement(DVec2::new(10.0, 0.0), &bodies);
        assert!((at_ten - -50000.0 / 30000.0).abs() < 1e-5);
    }

    #[test]
    fn test_displacement_deepest_at_body() {
        let mesh = SpacetimeMesh::default();
        let bodies = vec![body_at(3.0, -2.0, 1000.0), body_at(-8.0, 5.0, 10.0)];

        let at_body = mesh.displacement(DVec2::new(3.0, -2.0), &bodies);
        for p in [DVec2::new(4.0, -2.0), DVec2::new(0.0, 0.0), DVec2::new(20.0, 20.0)] {
            assert!(at_body < mesh.displacement(p, &bodies));
        }
    }

    #[test]
    fn test_empty_space_is_flat() {
        let mesh = SpacetimeMesh::default();
        assert_eq!(mesh.displacement(DVec2::new(1.0, 1.0), &[]), 0.0);

        let lines = mesh.build_lines(&[]);
        assert!(lines.iter().all(|v| v.position[1] == mesh.baseline));
    }

    #[test]
    fn test_line_count() {
        let mesh = SpacetimeMesh {
            divisions: 4,
            ..Default::default()
        };
        let lines = mesh.build_lines(&[body_at(0.0, 0.0, 100.0)]);

        // 5 rows and 5 columns of 4 segments, 2 vertices each
        assert_eq!(lines.len(), 2 * 5 * 4 * 2);
        assert!(lines.iter().all(|v| v.position[1] <= mesh.baseline));
    }
}
