//! Commands sent back to the projectile-motion subsystem.

use serde::{Deserialize, Serialize};

use crate::types::{Position, ProjectileId};

/// Instruction for the host after an impact. Penetration produces none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectileCommand {
    /// Relaunch the projectile from the impact point.
    Relaunch {
        projectile: ProjectileId,
        /// New horizontal position (East).
        x: f64,
        /// New horizontal position (North).
        y: f64,
        height: f64,
        /// Radians above the horizontal.
        vertical_angle: f64,
        heading_degrees: f64,
        speed: f64,
    },
    /// The projectile broke up on impact and must be removed.
    Destroy {
        projectile: ProjectileId,
        position: Position,
    },
}

impl ProjectileCommand {
    pub fn projectile(&self) -> ProjectileId {
        match self {
            ProjectileCommand::Relaunch { projectile, .. }
            | ProjectileCommand::Destroy { projectile, .. } => *projectile,
        }
    }
}
