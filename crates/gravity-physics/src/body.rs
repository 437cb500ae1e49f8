//! Point-mass bodies and their position history

use std::collections::VecDeque;

use anyhow::ensure;
use glam::DVec2;

use crate::constants::MAX_TRAIL_LENGTH;

/// Bounded history of past positions, oldest first
///
/// Holds at most [`MAX_TRAIL_LENGTH`] entries; pushing past that evicts the
/// oldest one. Used for drawing only, never read by the integrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<DVec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(MAX_TRAIL_LENGTH + 1),
        }
    }

    /// Append a position, dropping the oldest entry when over capacity
    pub fn push(&mut self, pos: DVec2) {
        self.points.push_back(pos);
        if self.points.len() > MAX_TRAIL_LENGTH {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recently recorded position
    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DVec2> + '_ {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// A single point mass
///
/// `pos`, `vel` and `acc` are integrator state and change every step.
/// Mass, radius and color are fixed at construction; mass is guaranteed
/// positive and finite, since a zero mass would divide by zero when
/// converting force to acceleration.
#[derive(Debug, Clone)]
pub struct Body {
    /// Position in the orbital plane
    pub pos: DVec2,
    /// Velocity
    pub vel: DVec2,
    /// Acceleration from the most recent step
    pub acc: DVec2,

    mass: f64,
    radius: f32,
    color: [f32; 3],
    trail: Trail,
}

impl Body {
    /// Create a body with zero acceleration and an empty trail
    ///
    /// # Panics
    /// If `mass` is not a positive finite number.
    pub fn new(pos: DVec2, vel: DVec2, mass: f64, radius: f32, color: [f32; 3]) -> Self {
        assert!(
            mass.is_finite() && mass > 0.0,
            "body mass must be positive and finite, got {mass}"
        );

        Self {
            pos,
            vel,
            acc: DVec2::ZERO,
            mass,
            radius,
            color,
            trail: Trail::new(),
        }
    }

    /// Fallible variant of [`Body::new`] for masses coming from outside the program
    pub fn try_new(
        pos: DVec2,
        vel: DVec2,
        mass: f64,
        radius: f32,
        color: [f32; 3],
    ) -> anyhow::Result<Self> {
        ensure!(
            mass.is_finite() && mass > 0.0,
            "body mass must be positive and finite, got {mass}"
        );
        ensure!(
            pos.is_finite() && vel.is_finite(),
            "body state must be finite, got pos={pos} vel={vel}"
        );

        Ok(Self::new(pos, vel, mass, radius, color))
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Push the current position onto the trail
    pub fn record_trail(&mut self) {
        self.trail.push(self.pos);
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Linear momentum m·v
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    /// Kinetic energy ½·m·|v|²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}
