//! Material model for the ricochet pipeline.
//!
//! Maps stuff categories to density and hardness, and classifies impacted
//! things, terrains and roofs into a failure mode.

pub mod categories;
pub mod classify;

pub use classify::{classify_roof, unyielding_fallback, MaterialModel, MaterialSubject};
pub use ricochet_core as core;

#[cfg(test)]
mod tests;
