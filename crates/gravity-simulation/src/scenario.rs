//! Hardcoded starting configurations
//!
//! Every preset is deterministic so that `reset` always reproduces the same
//! bodies. Orbital speeds use the default gravitational constant, never the
//! live `g` tunable.

use glam::DVec2;
use gravity_physics::{Body, G};

pub const SUN_MASS: f64 = 50000.0;
pub const EARTH_MASS: f64 = 10.0;
pub const MARS_MASS: f64 = 5.0;

pub const EARTH_ORBIT_RADIUS: f64 = 10.0;
pub const MARS_ORBIT_RADIUS: f64 = 15.0;

const SUN_COLOR: [f32; 3] = [1.0, 0.85, 0.2];
const EARTH_COLOR: [f32; 3] = [0.2, 0.5, 1.0];
const MARS_COLOR: [f32; 3] = [0.9, 0.3, 0.2];
const PLANET_COLOR: [f32; 3] = [0.7, 0.9, 0.6];

/// Starting configuration restored by [`crate::Simulation::reset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// Heavy sun at the origin with two light planets on circular orbits
    #[default]
    SunEarthMars,
    /// Two equal stars circling their barycenter, with one distant planet
    BinaryStar,
    /// No bodies; the host populates it with `add_body`
    Empty,
}

/// Speed of a circular orbit of `radius` around a fixed `central_mass`
pub fn orbital_speed(g: f64, central_mass: f64, radius: f64) -> f64 {
    (g * central_mass / radius).sqrt()
}

/// Build the bodies for `scenario`, in a fixed insertion order
pub fn initial_setup(scenario: Scenario) -> Vec<Body> {
    match scenario {
        Scenario::SunEarthMars => sun_earth_mars(),
        Scenario::BinaryStar => binary_star(),
        Scenario::Empty => Vec::new(),
    }
}

fn sun_earth_mars() -> Vec<Body> {
    let earth_speed = orbital_speed(G, SUN_MASS, EARTH_ORBIT_RADIUS);
    let mars_speed = orbital_speed(G, SUN_MASS, MARS_ORBIT_RADIUS);

    // Sun recoils so total momentum is zero and the system stays in frame
    let planet_momentum = EARTH_MASS * earth_speed + MARS_MASS * mars_speed;
    let sun_vel = DVec2::new(0.0, -planet_momentum / SUN_MASS);

    vec![
        Body::new(DVec2::ZERO, sun_vel, SUN_MASS, 0.8, SUN_COLOR),
        Body::new(
            DVec2::new(EARTH_ORBIT_RADIUS, 0.0),
            DVec2::new(0.0, earth_speed),
            EARTH_MASS,
            0.3,
            EARTH_COLOR,
        ),
        Body::new(
            DVec2::new(MARS_ORBIT_RADIUS, 0.0),
            DVec2::new(0.0, mars_speed),
            MARS_MASS,
            0.25,
            MARS_COLOR,
        ),
    ]
}

fn binary_star() -> Vec<Body> {
    let star_mass = SUN_MASS * 0.4;
    let half_separation = 4.0;
    let planet_radius = 20.0;

    // Each star feels G m² / (2a)² and circles the barycenter at radius a
    let star_speed = (G * star_mass / (4.0 * half_separation)).sqrt();
    let planet_speed = orbital_speed(G, 2.0 * star_mass, planet_radius);
    let planet_mass = 1.0;
    let recoil = planet_mass * planet_speed / (2.0 * star_mass);

    vec![
        Body::new(
            DVec2::new(-half_separation, 0.0),
            DVec2::new(recoil, -star_speed),
            star_mass,
            0.6,
            SUN_COLOR,
        ),
        Body::new(
            DVec2::new(half_separation, 0.0),
            DVec2::new(recoil, star_speed),
            star_mass,
            0.6,
            MARS_COLOR,
        ),
        Body::new(
            DVec2::new(0.0, planet_radius),
            DVec2::new(-planet_speed, 0.0),
            planet_mass,
            0.2,
            PLANET_COLOR,
        ),
    ]
}
