//! ECS components for in-flight projectiles held by a host world.
//!
//! Components are plain data structs with no methods.
//! Impact logic lives in the sim crate, not components.

use serde::{Deserialize, Serialize};

use crate::types::ProjectileId;

/// Current flight state of a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Degrees, 0 = North, clockwise.
    pub heading_degrees: f64,
    /// Radians above the horizontal (negative = descending).
    pub vertical_angle: f64,
    /// m/s.
    pub speed: f64,
}

/// Static physical makeup of a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileBody {
    /// Host-facing identifier echoed in commands.
    pub id: ProjectileId,
    /// g/cm³.
    pub density: f64,
    /// GPa-equivalent.
    pub hardness: f64,
    pub diameter_mm: f64,
    pub mass_g: f64,
}

/// Number of ricochets this projectile has survived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BounceCount(pub u32);
