//! # Gravity Physics
//!
//! Point-mass bodies, their bounded position trails and the softened
//! Newtonian force law used by the n-body integrator.

pub mod body;
pub mod constants;
pub mod forces;

pub use body::*;
pub use constants::*;
pub use forces::*;
