//! Softened Newtonian gravity between point masses
//!
//! Direct O(n²) summation: every ordered pair is evaluated, so each
//! unordered pair is visited once from each side.

use glam::DVec2;

use crate::body::Body;

/// Gravitational force exerted on `on` by `from`
/// F = G * m1 * m2 / (r + ε)², directed along (from - on) / (r + ε)
///
/// The softening `ε` is added to the distance before any reciprocal, so the
/// magnitude never exceeds `G * m1 * m2 / ε²` and coincident bodies give zero.
pub fn gravitational_force(on: &Body, from: &Body, g: f64, softening: f64) -> DVec2 {
    let dir = from.pos - on.pos;
    let dist = dir.length() + softening;

    let force_magnitude = g * on.mass() * from.mass() / (dist * dist);
    (dir / dist) * force_magnitude
}

/// Net force on every body from every other body
///
/// `out` is overwritten; `out[i]` receives the sum over `j != i`. All forces
/// come from the positions in `bodies` as passed in, so nothing moves while
/// they are being accumulated.
pub fn accumulate_forces(bodies: &[Body], g: f64, softening: f64, out: &mut [DVec2]) {
    debug_assert_eq!(bodies.len(), out.len());

    for f in out.iter_mut() {
        *f = DVec2::ZERO;
    }

    for (i, on) in bodies.iter().enumerate() {
        for (j, from) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            out[i] += gravitational_force(on, from, g, softening);
        }
    }
}

/// Total softened potential energy, -G * m1 * m2 / (r + ε) over unordered pairs
pub fn potential_energy(bodies: &[Body], g: f64, softening: f64) -> f64 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let dist = (b.pos - a.pos).length() + softening;
            energy -= g * a.mass() * b.mass() / dist;
        }
    }
    energy
}
