//! Surface normal resolution.
//!
//! Classifies an impact as terrain, roof or solid-object face and returns a
//! unit surface normal. Box-like solids get a coarse quantized face normal:
//! the center-to-impact vector is rotated by 45° and the signs of its
//! components pick one of the four cardinal faces.

use glam::DVec3;

use ricochet_core::constants::{FACE_QUANTIZE_OFFSET_DEG, GROUND_EPSILON, TOP_EPSILON};
use ricochet_core::enums::ImpactClass;
use ricochet_core::environment::ImpactEnvironment;
use ricochet_core::events::{ImpactAnomaly, ImpactedEntity};
use ricochet_core::types::{Bounds, Position};

/// Resolved surface at the impact point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceContact {
    /// Unit normal pointing out of the surface.
    pub normal: DVec3,
    pub class: ImpactClass,
}

/// Height tolerances used while classifying impacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryTolerances {
    /// Max distance above ground still counted as a ground hit (m).
    pub ground_epsilon: f64,
    /// Distance below an object's top still counted as a top hit (m).
    pub top_epsilon: f64,
}

impl Default for GeometryTolerances {
    fn default() -> Self {
        Self {
            ground_epsilon: GROUND_EPSILON,
            top_epsilon: TOP_EPSILON,
        }
    }
}

/// Resolve the surface normal and impact class for an impact.
///
/// Fails with `InvalidEnvironment` when the environment cannot describe the
/// surface: an elevated hit with no roof, or a solid object without bounds.
pub fn resolve_normal(
    impacted: &ImpactedEntity,
    position: &Position,
    env: &dyn ImpactEnvironment,
    tolerances: &GeometryTolerances,
) -> Result<SurfaceContact, ImpactAnomaly> {
    match impacted {
        ImpactedEntity::None => {
            let ground = env.ground_height(position);
            if position.z - ground <= tolerances.ground_epsilon {
                Ok(terrain_contact())
            } else {
                roof_contact(position, env)
            }
        }
        ImpactedEntity::Terrain => Ok(terrain_contact()),
        ImpactedEntity::Roof => roof_contact(position, env),
        ImpactedEntity::SolidObject(thing) => {
            let bounds = env
                .bounds_of(thing.id)
                .ok_or_else(|| ImpactAnomaly::InvalidEnvironment {
                    reason: format!("no bounds for thing {} ({})", thing.id, thing.def),
                })?;
            Ok(SurfaceContact {
                normal: object_normal(&bounds, position, tolerances.top_epsilon),
                class: ImpactClass::SolidObjectFace,
            })
        }
    }
}

fn terrain_contact() -> SurfaceContact {
    SurfaceContact {
        normal: DVec3::Z,
        class: ImpactClass::Terrain,
    }
}

/// Roof hit: from above the normal points up, from below it points down.
fn roof_contact(
    position: &Position,
    env: &dyn ImpactEnvironment,
) -> Result<SurfaceContact, ImpactAnomaly> {
    let roof = env
        .roof_at(position)
        .ok_or_else(|| ImpactAnomaly::InvalidEnvironment {
            reason: format!(
                "elevated impact at ({:.2}, {:.2}, {:.2}) with no roof",
                position.x, position.y, position.z
            ),
        })?;
    let normal = if position.z >= roof.height {
        DVec3::Z
    } else {
        DVec3::NEG_Z
    };
    Ok(SurfaceContact {
        normal,
        class: ImpactClass::Roof,
    })
}

/// Normal of the face of `bounds` that was hit at `position`.
pub fn object_normal(bounds: &Bounds, position: &Position, top_epsilon: f64) -> DVec3 {
    if position.z >= bounds.top() - top_epsilon {
        return DVec3::Z;
    }

    let center = bounds.center();
    let vx = position.x - center.x;
    let vy = position.y - center.y;

    let (sin, cos) = FACE_QUANTIZE_OFFSET_DEG.to_radians().sin_cos();
    let rx = vx * cos - vy * sin;
    let ry = vx * sin + vy * cos;

    match (rx >= 0.0, ry >= 0.0) {
        (true, true) => DVec3::X,
        (false, true) => DVec3::Y,
        (false, false) => DVec3::NEG_X,
        (true, false) => DVec3::NEG_Y,
    }
}
