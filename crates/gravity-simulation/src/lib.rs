//! # Gravity Simulation
//!
//! Owns a small set of bodies and advances them with fixed-step
//! semi-implicit Euler under direct-sum Newtonian gravity.

pub mod params;
pub mod scenario;
pub mod simulation;

pub use params::*;
pub use scenario::*;
pub use simulation::*;
