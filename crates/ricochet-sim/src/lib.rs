//! Ricochet resolution for projectile impacts.
//!
//! Owns the solver and the orchestrating engine, plus a hecs-backed reference
//! host that applies the engine's commands to in-flight projectiles.

pub mod config;
pub mod engine;
pub mod host;
pub mod solver;

pub use config::RicochetConfig;
pub use engine::RicochetEngine;
pub use host::ProjectileWorld;
pub use ricochet_core as core;
pub use solver::{RicochetSolver, Solution};
