//! Impact geometry for the ricochet pipeline.
//!
//! Surface normal resolution and a grid-backed map implementing the
//! environment queries.

pub use ricochet_core as core;

pub mod map;
pub mod normal;

// Re-export key types for convenience.
pub use map::{ImpactMap, MapHeader};
pub use normal::{object_normal, resolve_normal, GeometryTolerances, SurfaceContact};
