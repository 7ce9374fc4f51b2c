//! Per-impact results. Produced once, consumed immediately, never stored.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::commands::ProjectileCommand;
use crate::enums::{BounceKind, FailureMode};
use crate::events::Diagnostic;

/// Material properties derived for one impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// g/cm³.
    pub density: f64,
    /// GPa-equivalent.
    pub hardness: f64,
    pub failure_mode: FailureMode,
}

impl MaterialProperties {
    pub fn new(density: f64, hardness: f64, failure_mode: FailureMode) -> Self {
        Self {
            density,
            hardness,
            failure_mode,
        }
    }
}

/// Outcome of the ricochet decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceOutcome {
    pub kind: BounceKind,
    pub new_speed: f64,
    /// Exit angle measured from the surface plane (radians).
    pub exit_angle: f64,
    /// Vertical component of the new direction (radians above horizontal).
    pub deflection_angle: f64,
    pub heading_degrees: f64,
    /// Unit direction after the bounce. Equals the incident direction for
    /// penetration.
    pub direction: DVec3,
}

impl BounceOutcome {
    /// Penetration keeps the incident direction and speed.
    pub fn penetrate(speed: f64, direction: DVec3) -> Self {
        Self {
            kind: BounceKind::Penetrate,
            new_speed: speed,
            exit_angle: 0.0,
            deflection_angle: direction.z.clamp(-1.0, 1.0).asin(),
            heading_degrees: crate::types::heading_degrees(direction),
            direction,
        }
    }

    pub fn is_ricochet(&self) -> bool {
        self.kind == BounceKind::Ricochet
    }
}

/// Everything the orchestrator hands back for one impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResponse {
    pub outcome: BounceOutcome,
    pub command: Option<ProjectileCommand>,
    pub diagnostics: Vec<Diagnostic>,
}
