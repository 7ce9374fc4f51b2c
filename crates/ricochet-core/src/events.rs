//! Impact events received from the projectile-motion subsystem and the
//! diagnostics emitted while resolving them.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::DiagnosticLevel;
use crate::types::{Position, ProjectileId, ProjectileState, ThingId};

/// A placed solid object: its instance id and its def name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingRef {
    pub id: ThingId,
    pub def: String,
}

/// What the projectile reported hitting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ImpactedEntity {
    /// Nothing specific; geometry infers ground or roof from height.
    #[default]
    None,
    Terrain,
    Roof,
    SolidObject(ThingRef),
}

/// An impact reported by the projectile-motion subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEvent {
    pub projectile: ProjectileId,
    #[serde(default)]
    pub impacted: ImpactedEntity,
    pub position: Position,
    /// Direction of travel. Need not be normalized.
    pub direction: DVec3,
    pub state: ProjectileState,
}

/// Non-fatal anomalies detected while resolving an impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImpactAnomaly {
    /// Missing or out-of-map environment context.
    InvalidEnvironment { reason: String },
    /// Projectile snapshot is not physical (zero speed, NaN direction...).
    InvalidProjectile { reason: String },
    /// Incident angle came out negative; clamped to zero.
    GeometryAnomaly { incident_angle_deg: f64 },
}

impl ImpactAnomaly {
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            ImpactAnomaly::InvalidEnvironment { .. } | ImpactAnomaly::InvalidProjectile { .. } => {
                DiagnosticLevel::Warning
            }
            ImpactAnomaly::GeometryAnomaly { .. } => DiagnosticLevel::Error,
        }
    }
}

impl fmt::Display for ImpactAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactAnomaly::InvalidEnvironment { reason } => {
                write!(f, "invalid environment: {reason}")
            }
            ImpactAnomaly::InvalidProjectile { reason } => {
                write!(f, "invalid projectile: {reason}")
            }
            ImpactAnomaly::GeometryAnomaly { incident_angle_deg } => write!(
                f,
                "negative incident angle {incident_angle_deg:.3}° clamped to 0"
            ),
        }
    }
}

/// A diagnostic recorded for one impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub projectile: ProjectileId,
    pub anomaly: ImpactAnomaly,
}

impl Diagnostic {
    pub fn new(projectile: ProjectileId, anomaly: ImpactAnomaly) -> Self {
        Self {
            level: anomaly.level(),
            projectile,
            anomaly,
        }
    }
}

/// Immutable per-impact snapshot handed to the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactContext {
    pub projectile: ProjectileId,
    pub position: Position,
    pub impacted: ImpactedEntity,
    /// Unit incident direction.
    pub direction: DVec3,
    pub state: ProjectileState,
}

impl ImpactContext {
    /// Validate an event and normalize its direction.
    pub fn from_event(event: &ImpactEvent) -> Result<Self, ImpactAnomaly> {
        if !event.position.is_finite() {
            return Err(ImpactAnomaly::InvalidProjectile {
                reason: "non-finite impact position".into(),
            });
        }
        let direction = event.direction.try_normalize().ok_or_else(|| {
            ImpactAnomaly::InvalidProjectile {
                reason: "zero or non-finite direction".into(),
            }
        })?;
        if !event.state.is_physical() {
            return Err(ImpactAnomaly::InvalidProjectile {
                reason: format!("non-physical projectile state {:?}", event.state),
            });
        }
        Ok(Self {
            projectile: event.projectile,
            position: event.position,
            impacted: event.impacted.clone(),
            direction,
            state: event.state,
        })
    }
}
