//! Physics parameters for runtime tuning

use gravity_physics::{DT, G, SOFTENING};

/// Simulation-wide tunables, owned by each [`crate::Simulation`]
///
/// The host may change any field between steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Gravitational constant
    pub g: f64,
    /// Integration time step
    pub dt: f64,
    /// Distance softening ε
    pub softening: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            g: G,
            dt: DT,
            softening: SOFTENING,
        }
    }
}
