//! Engine configuration.

use serde::{Deserialize, Serialize};

use ricochet_core::constants::{GROUND_EPSILON, MAX_CLASSIFY_DEPTH, TOP_EPSILON};
use ricochet_core::enums::AngleModel;
use ricochet_geometry::GeometryTolerances;

/// Configuration for the ricochet engine. Every field has a default, so a
/// partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RicochetConfig {
    /// Exit-angle law for frangible and liquid surfaces.
    pub angle_model: AngleModel,
    /// Projectiles break up on unyielding surfaces instead of ricocheting.
    pub fragment_on_unyielding: bool,
    /// Max height above ground still counted as a ground hit (m).
    pub ground_epsilon: f64,
    /// Distance below an object's top still counted as a top hit (m).
    pub top_epsilon: f64,
    /// Max definition hops followed during material classification.
    pub max_classify_depth: usize,
}

impl Default for RicochetConfig {
    fn default() -> Self {
        Self {
            angle_model: AngleModel::default(),
            fragment_on_unyielding: false,
            ground_epsilon: GROUND_EPSILON,
            top_epsilon: TOP_EPSILON,
            max_classify_depth: MAX_CLASSIFY_DEPTH,
        }
    }
}

impl RicochetConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn tolerances(&self) -> GeometryTolerances {
        GeometryTolerances {
            ground_epsilon: self.ground_epsilon,
            top_epsilon: self.top_epsilon,
        }
    }
}
