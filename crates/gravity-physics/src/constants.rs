//! Default physical constants for the gravity simulation
//!
//! Values are in simulation units, tuned so that a handful of bodies orbit
//! visibly at real-time frame rates rather than to match SI magnitudes.

/// Default gravitational constant
pub const G: f64 = 2.0;

/// Default integration time step
pub const DT: f64 = 0.001;

/// Softening added to inter-body distance to keep forces finite at r→0
pub const SOFTENING: f64 = 1.0e-3;

/// Maximum number of past positions kept per body
pub const MAX_TRAIL_LENGTH: usize = 500;
