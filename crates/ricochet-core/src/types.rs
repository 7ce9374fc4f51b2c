//! Fundamental geometric and projectile types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Host-assigned identifier of a placed solid object.
pub type ThingId = u64;

/// Host-assigned identifier of an in-flight projectile.
pub type ProjectileId = u64;

/// 3D position in map space (meters, Cartesian).
/// x = East, y = North, z = Up (height above ground level).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Axis-aligned bounds of a solid object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// A box occupying one map cell footprint from the ground up to `height`.
    pub fn cell(x: f64, y: f64, cell_size: f64, height: f64) -> Self {
        Self {
            min: Position::new(x, y, 0.0),
            max: Position::new(x + cell_size, y + cell_size, height),
        }
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Height of the top face.
    pub fn top(&self) -> f64 {
        self.max.z
    }
}

/// Physical properties of the projectile at the moment of impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileState {
    /// Speed (m/s).
    pub speed: f64,
    /// Projectile density (g/cm³).
    pub density: f64,
    /// Projectile hardness (GPa-equivalent).
    pub hardness: f64,
    /// Caliber (mm).
    pub diameter_mm: f64,
    /// Mass (grams).
    pub mass_g: f64,
}

impl ProjectileState {
    /// True when every physical quantity is finite and strictly positive
    /// (hardness may be zero for soft projectiles).
    pub fn is_physical(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        positive(self.speed)
            && positive(self.density)
            && positive(self.diameter_mm)
            && positive(self.mass_g)
            && self.hardness.is_finite()
            && self.hardness >= 0.0
    }
}

/// Heading in degrees (0 = North, clockwise) of a direction's horizontal part.
pub fn heading_degrees(direction: DVec3) -> f64 {
    direction.x.atan2(direction.y).to_degrees().rem_euclid(360.0)
}

/// Unit direction from a heading (degrees, 0 = North, clockwise) and a
/// vertical angle (radians, positive = climbing).
pub fn direction_from_heading(heading_degrees: f64, vertical_angle: f64) -> DVec3 {
    let h = heading_degrees.to_radians();
    let horizontal = vertical_angle.cos();
    DVec3::new(h.sin() * horizontal, h.cos() * horizontal, vertical_angle.sin())
}
