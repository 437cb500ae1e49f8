//! CPU n-body simulation manager
//!
//! One call to [`Simulation::update_physics`] advances every body by a single
//! fixed step using semi-implicit Euler:
//!
//! 1. forces for all bodies from the current position snapshot,
//! 2. `vel += F / m * dt` for all bodies,
//! 3. `pos += vel * dt` for all bodies, using the new velocities,
//! 4. each body records its new position in its trail.
//!
//! The phases must not be interleaved: a body's velocity is never updated
//! before every force has been read, and no position moves before every
//! velocity is updated.

use glam::DVec2;
use gravity_physics::{accumulate_forces, potential_energy, Body};

use crate::params::SimulationParams;
use crate::scenario::{initial_setup, Scenario};

/// Owns the bodies and advances them
pub struct Simulation {
    /// Tunables, settable between steps
    pub params: SimulationParams,

    scenario: Scenario,
    bodies: Vec<Body>,
    // Scratch buffer reused across steps, one entry per body
    forces: Vec<DVec2>,

    step_count: u64,
    elapsed_time: f64,
    diverged: bool,
}

impl Simulation {
    /// Default parameters seeded with the sun/earth/mars preset
    pub fn new() -> Self {
        Self::with_scenario(Scenario::default(), SimulationParams::default())
    }

    pub fn with_scenario(scenario: Scenario, params: SimulationParams) -> Self {
        let mut sim = Self {
            params,
            scenario,
            bodies: Vec::new(),
            forces: Vec::new(),
            step_count: 0,
            elapsed_time: 0.0,
            diverged: false,
        };
        sim.initial_setup();
        sim
    }

    fn initial_setup(&mut self) {
        self.bodies = initial_setup(self.scenario);
        log::info!(
            "Initialized {:?} with {} bodies (G={}, dt={})",
            self.scenario,
            self.bodies.len(),
            self.params.g,
            self.params.dt
        );
        for (i, b) in self.bodies.iter().enumerate() {
            log::debug!(
                "  [{}] pos={} vel={} mass={} radius={}",
                i,
                b.pos,
                b.vel,
                b.mass(),
                b.radius()
            );
        }
    }

    /// Append a body; its trail starts empty
    pub fn add_body(&mut self, mut body: Body) {
        body.clear_trail();
        log::debug!(
            "Adding body #{} at {} (mass={})",
            self.bodies.len(),
            body.pos,
            body.mass()
        );
        self.bodies.push(body);
    }

    /// Discard all bodies and restore the stored scenario's starting configuration
    ///
    /// The stored scenario is the one given at construction or the latest
    /// [`Simulation::set_scenario`], so after a switch this no longer matches
    /// [`Simulation::new`]. Parameters are kept; step count and elapsed time
    /// go back to zero.
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.step_count = 0;
        self.elapsed_time = 0.0;
        self.diverged = false;
        self.initial_setup();
    }

    /// Switch preset and reset to it
    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.scenario = scenario;
        self.reset();
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Current bodies, in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance every body by exactly one step of `params.dt`
    pub fn update_physics(&mut self) {
        let SimulationParams { g, dt, softening } = self.params;

        self.forces.resize(self.bodies.len(), DVec2::ZERO);
        accumulate_forces(&self.bodies, g, softening, &mut self.forces);

        for (body, force) in self.bodies.iter_mut().zip(&self.forces) {
            body.acc = *force / body.mass();
            body.vel += body.acc * dt;
        }

        for body in self.bodies.iter_mut() {
            body.pos += body.vel * dt;
        }

        for body in self.bodies.iter_mut() {
            body.record_trail();
        }

        self.step_count += 1;
        self.elapsed_time += dt;

        if !self.diverged && !self.bodies.iter().all(|b| b.pos.is_finite() && b.vel.is_finite()) {
            self.diverged = true;
            log::warn!("Simulation state became non-finite at step {}", self.step_count);
        }
    }

    /// Number of completed steps since construction or the last reset
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated time since construction or the last reset
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Softened potential energy with the current `g` and softening
    pub fn potential_energy(&self) -> f64 {
        potential_energy(&self.bodies, self.params.g, self.params.softening)
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Mass-weighted mean position, or the origin when empty
    pub fn center_of_mass(&self) -> DVec2 {
        let total_mass: f64 = self.bodies.iter().map(Body::mass).sum();
        if total_mass == 0.0 {
            return DVec2::ZERO;
        }
        self.bodies
            .iter()
            .map(|b| b.pos * b.mass())
            .sum::<DVec2>()
            / total_mass
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravity_physics::MAX_TRAIL_LENGTH;

    fn empty_sim() -> Simulation {
        Simulation::with_scenario(Scenario::Empty, SimulationParams::default())
    }

    fn body(pos: DVec2, vel: DVec2, mass: f64) -> Body {
        Body::new(pos, vel, mass, 1.0, [1.0; 3])
    }

    #[test]
    fn test_new_seeds_default_scenario() {
        let sim = Simulation::new();
        assert_eq!(sim.scenario(), Scenario::SunEarthMars);
        assert_eq!(sim.len(), 3);
        assert_eq!(sim.step_count(), 0);
    }

    #[test]
    fn test_add_body_appends_with_empty_trail() {
        let mut sim = empty_sim();
        let mut b = body(DVec2::new(1.0, 0.0), DVec2::ZERO, 2.0);
        b.record_trail();
        b.record_trail();

        sim.add_body(b);
        assert_eq!(sim.len(), 1);
        assert!(sim.bodies()[0].trail().is_empty());
    }

    #[test]
    fn test_single_body_moves_in_straight_line() {
        let mut sim = empty_sim();
        let vel = DVec2::new(3.0, -1.5);
        let start = DVec2::new(2.0, 5.0);
        sim.add_body(body(start, vel, 7.0));

        let dt = sim.params.dt;
        for step in 1..=250 {
            let before = sim.bodies()[0].pos;
            sim.update_physics();
            let b = &sim.bodies()[0];

            assert_eq!(b.vel, vel, "Velocity changed at step {step}");
            assert_eq!(b.acc, DVec2::ZERO);
            assert_eq!(b.pos, before + vel * dt);
        }
    }

    #[test]
    fn test_two_body_step_matches_hand_computation() {
        let mut sim = empty_sim();
        sim.add_body(body(DVec2::ZERO, DVec2::ZERO, 50000.0));
        sim.add_body(body(DVec2::new(1.0, 0.0), DVec2::ZERO, 10.0));

        sim.update_physics();

        let SimulationParams { g, dt, softening } = sim.params;
        let dist = 1.0 + softening;
        // F / m along -x, scaled by |dir| / dist
        let expected_speed = g * 50000.0 / (dist * dist) / dist * dt;

        let planet = &sim.bodies()[1];
        assert!(planet.vel.x < 0.0);
        assert!(planet.vel.y.abs() < 1e-12);
        assert!((planet.vel.x + expected_speed).abs() < 1e-9);
        // Within half a percent of G * M * dt / (1 + ε)²
        assert!((planet.vel.length() - 99.8).abs() < 0.5);
        assert_eq!(planet.pos, DVec2::new(1.0, 0.0) + planet.vel * dt);
    }

    #[test]
    fn test_forces_use_position_snapshot() {
        // Symmetric pair: if body 1 saw body 0's updated state, the
        // accelerations would no longer mirror each other.
        let mut sim = empty_sim();
        sim.add_body(body(DVec2::new(-1.0, 0.0), DVec2::ZERO, 100.0));
        sim.add_body(body(DVec2::new(1.0, 0.0), DVec2::ZERO, 100.0));

        sim.update_physics();
        let [a, b] = sim.bodies() else {
            panic!("expected two bodies");
        };
        assert_eq!(a.acc, -b.acc);
        assert_eq!(a.pos, -b.pos);
    }

    #[test]
    fn test_position_uses_updated_velocity() {
        let mut sim = empty_sim();
        sim.add_body(body(DVec2::ZERO, DVec2::ZERO, 1000.0));
        sim.add_body(body(DVec2::new(2.0, 0.0), DVec2::ZERO, 1.0));

        sim.update_physics();
        let planet = &sim.bodies()[1];

        // Explicit Euler would leave a body at rest in place for one step
        assert!(planet.pos.x < 2.0);
        assert_eq!(planet.pos, DVec2::new(2.0, 0.0) + planet.vel * sim.params.dt);
    }

    #[test]
    fn test_momentum_conserved() {
        let mut sim = Simulation::new();
        let initial = sim.total_momentum();
        for _ in 0..1000 {
            sim.update_physics();
        }
        let drift = (sim.total_momentum() - initial).length();
        assert!(drift < 1e-6, "Momentum drifted by {drift}");
    }

    #[test]
    fn test_energy_bounded_over_one_orbit() {
        let mut sim = Simulation::new();
        let initial = sim.total_energy();

        // Earth's period is 2π·r/v ≈ 0.63 time units
        for _ in 0..700 {
            sim.update_physics();
        }

        let relative = ((sim.total_energy() - initial) / initial).abs();
        assert!(relative < 0.01, "Energy drifted by {:.4}%", relative * 100.0);

        let earth_radius = (sim.bodies()[1].pos - sim.bodies()[0].pos).length();
        assert!((earth_radius - 10.0).abs() < 0.5, "Earth left its orbit: r={earth_radius}");
    }

    #[test]
    fn test_trail_capped_and_tracks_position() {
        let mut sim = Simulation::new();
        for _ in 0..(MAX_TRAIL_LENGTH + 37) {
            sim.update_physics();
        }

        for b in sim.bodies() {
            assert_eq!(b.trail().len(), MAX_TRAIL_LENGTH);
            assert_eq!(b.trail().latest(), Some(b.pos));
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sim = Simulation::new();
        for _ in 0..100 {
            sim.update_physics();
        }
        sim.add_body(body(DVec2::new(30.0, 0.0), DVec2::ZERO, 1.0));

        sim.reset();
        let once: Vec<_> = sim.bodies().iter().map(|b| (b.pos, b.vel, b.mass())).collect();
        sim.reset();
        sim.reset();
        let thrice: Vec<_> = sim.bodies().iter().map(|b| (b.pos, b.vel, b.mass())).collect();

        assert_eq!(once, thrice);
        assert_eq!(sim.step_count(), 0);
        assert_eq!(sim.elapsed_time(), 0.0);
        assert!(sim.bodies().iter().all(|b| b.trail().is_empty()));

        let fresh: Vec<_> = Simulation::new()
            .bodies()
            .iter()
            .map(|b| (b.pos, b.vel, b.mass()))
            .collect();
        assert_eq!(once, fresh);
    }

    #[test]
    fn test_reset_keeps_tunables() {
        let mut sim = Simulation::new();
        sim.params.g = 5.0;
        sim.params.dt = 0.01;
        sim.reset();
        assert_eq!(sim.params.g, 5.0);
        assert_eq!(sim.params.dt, 0.01);
    }

    #[test]
    fn test_set_scenario() {
        let mut sim = Simulation::new();
        sim.set_scenario(Scenario::BinaryStar);
        assert_eq!(sim.scenario(), Scenario::BinaryStar);
        assert_eq!(sim.len(), 3);

        sim.set_scenario(Scenario::Empty);
        assert!(sim.is_empty());
        sim.update_physics();
        assert_eq!(sim.step_count(), 1);
    }

    #[test]
    fn test_reset_restores_stored_scenario() {
        let mut sim = Simulation::new();
        sim.set_scenario(Scenario::BinaryStar);
        for _ in 0..50 {
            sim.update_physics();
        }
        sim.reset();

        let expected = initial_setup(Scenario::BinaryStar);
        assert_eq!(sim.scenario(), Scenario::BinaryStar);
        assert_eq!(sim.len(), expected.len());
        for (b, e) in sim.bodies().iter().zip(&expected) {
            assert_eq!(b.pos, e.pos);
            assert_eq!(b.vel, e.vel);
            assert_eq!(b.mass(), e.mass());
        }
        assert_ne!(sim.bodies()[0].mass(), Simulation::new().bodies()[0].mass());
    }

    #[test]
    fn test_center_of_mass() {
        let mut sim = empty_sim();
        assert_eq!(sim.center_of_mass(), DVec2::ZERO);

        sim.add_body(body(DVec2::new(0.0, 0.0), DVec2::ZERO, 3.0));
        sim.add_body(body(DVec2::new(4.0, 0.0), DVec2::ZERO, 1.0));
        assert_eq!(sim.center_of_mass(), DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_elapsed_time_tracks_dt() {
        let mut sim = Simulation::new();
        sim.params.dt = 0.25;
        sim.update_physics();
        sim.update_physics();
        assert_eq!(sim.elapsed_time(), 0.5);
        assert_eq!(sim.step_count(), 2);
    }
}
