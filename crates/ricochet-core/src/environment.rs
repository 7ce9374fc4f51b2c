//! Read-only map queries the host provides to the impact pipeline.

use crate::types::{Bounds, Position, ThingId};

/// Roof covering a map cell.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoofCell {
    /// Roof def name.
    pub roof: String,
    /// Height of the roof's vertical bound (m).
    pub height: f64,
}

/// Query capability over the host's map. The pipeline never mutates it.
pub trait ImpactEnvironment {
    /// Whether the position lies inside the map.
    fn contains(&self, pos: &Position) -> bool;

    /// Ground height at the position's cell.
    fn ground_height(&self, _pos: &Position) -> f64 {
        0.0
    }

    /// Terrain def name at the position's cell.
    fn terrain_at(&self, pos: &Position) -> Option<&str>;

    fn roof_at(&self, pos: &Position) -> Option<&RoofCell>;

    fn bounds_of(&self, thing: ThingId) -> Option<Bounds>;
}
