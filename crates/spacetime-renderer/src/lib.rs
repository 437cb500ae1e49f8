//! # Spacetime Renderer
//!
//! Per-frame render data for the gravity simulation: body discs, trails and
//! the warped "spacetime" grid. Everything here reads body state and produces
//! GPU-ready vertices; nothing feeds back into the physics.

pub mod camera;
pub mod frame;
pub mod mesh;
pub mod palette;
pub mod vertex;

pub use camera::*;
pub use frame::*;
pub use mesh::*;
pub use vertex::*;
