//! Ricochet physics.
//!
//! Computes the incident angle, the critical ricochet angle for the impacted
//! material, and the post-impact speed and exit angle. Each failure mode has
//! its own law; every law degrades to penetration when no ricochet is
//! physically possible.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DQuat, DVec3};
use rand::Rng;

use ricochet_core::constants::*;
use ricochet_core::enums::{AngleModel, BounceKind, FailureMode};
use ricochet_core::events::{ImpactAnomaly, ImpactContext};
use ricochet_core::outcome::{BounceOutcome, MaterialProperties};
use ricochet_core::types::{heading_degrees, ProjectileState};

use crate::config::RicochetConfig;

/// Solver output: the outcome plus any anomaly noticed on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub outcome: BounceOutcome,
    pub anomaly: Option<ImpactAnomaly>,
}

/// Speed and exit angle (radians from the surface) of a ricochet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rebound {
    pub speed: f64,
    pub exit_angle: f64,
}

/// Stateless ricochet solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RicochetSolver {
    pub angle_model: AngleModel,
    pub fragment_on_unyielding: bool,
}

impl Default for RicochetSolver {
    fn default() -> Self {
        Self::new(&RicochetConfig::default())
    }
}

impl RicochetSolver {
    pub fn new(config: &RicochetConfig) -> Self {
        Self {
            angle_model: config.angle_model,
            fragment_on_unyielding: config.fragment_on_unyielding,
        }
    }

    /// Decide penetrate / ricochet / fragment for one impact.
    ///
    /// `normal` must be a unit vector. A negative incident angle (projectile
    /// moving away from the surface) is reported and clamped to zero.
    pub fn solve<R: Rng + ?Sized>(
        &self,
        ctx: &ImpactContext,
        normal: DVec3,
        material: &MaterialProperties,
        rng: &mut R,
    ) -> Solution {
        let raw_alpha = incident_angle(ctx.direction, normal);
        let anomaly = (raw_alpha < 0.0).then(|| ImpactAnomaly::GeometryAnomaly {
            incident_angle_deg: raw_alpha.to_degrees(),
        });
        let alpha = raw_alpha.max(0.0);
        let state = &ctx.state;

        let rebound = match material.failure_mode {
            FailureMode::Malleable => malleable_rebound(state, material, alpha),
            FailureMode::Unyielding => {
                if self.fragment_on_unyielding {
                    return Solution {
                        outcome: fragment(ctx.direction),
                        anomaly,
                    };
                }
                Some(unyielding_rebound(state.speed, alpha))
            }
            FailureMode::Frangible | FailureMode::Liquid => {
                frangible_rebound(state, material, alpha, self.angle_model, rng)
            }
        };

        let outcome = match rebound {
            Some(rebound) => ricochet(ctx.direction, normal, alpha, state.speed, rebound),
            None => BounceOutcome::penetrate(state.speed, ctx.direction),
        };
        Solution { outcome, anomaly }
    }
}

/// Angle between the travel direction and the surface plane (radians).
/// Positive when the projectile moves into the surface.
pub fn incident_angle(direction: DVec3, normal: DVec3) -> f64 {
    (-direction.dot(normal)).clamp(-1.0, 1.0).asin()
}

/// Critical angle for a malleable target, or None when no angle can ricochet.
///
/// Solves `(1 + r)·t² − 2s·t + r·Yp/Yt = 0` for `t = tan θc`, with
/// `r = ρp/ρt` and the larger root taken. A negative discriminant means the
/// target is too soft relative to the projectile.
pub fn malleable_critical_angle(projectile: &ProjectileState, target: &MaterialProperties) -> Option<f64> {
    if target.hardness <= 0.0 || target.density <= 0.0 {
        return None;
    }
    let r = projectile.density / target.density;
    let s = MALLEABLE_SHAPE_FACTOR;
    let discriminant = s * s - r * (1.0 + r) * projectile.hardness / target.hardness;
    if discriminant < 0.0 {
        return None;
    }
    Some(((s + discriminant.sqrt()) / (1.0 + r)).atan())
}

/// Ballistic-limit speed v50 of a malleable target (m/s).
///
/// `v50 = 11.9 · H_psi^0.333 · (radius_cm · L)^0.75 / √mass_g`
pub fn ballistic_limit(target_hardness: f64, diameter_mm: f64, mass_g: f64) -> f64 {
    let hardness_psi = target_hardness * GPA_TO_PSI;
    let radius_cm = diameter_mm / 20.0;
    V50_COEFFICIENT * hardness_psi.powf(0.333) * (radius_cm * PROJECTILE_LENGTH_FACTOR).powf(0.75)
        / mass_g.sqrt()
}

/// Malleable law: steep fixed exit, speed loss scaled by v50.
fn malleable_rebound(
    projectile: &ProjectileState,
    target: &MaterialProperties,
    alpha: f64,
) -> Option<Rebound> {
    let critical = malleable_critical_angle(projectile, target)?;
    if alpha > critical {
        return None;
    }

    let v50 = ballistic_limit(target.hardness, projectile.diameter_mm, projectile.mass_g);
    if !(v50.is_finite() && v50 > 0.0) {
        return None;
    }

    let v = projectile.speed;
    let sin = alpha.sin();
    let half_sin_sq = sin * sin / 2.0;
    let loss = half_sin_sq + (1.0 - half_sin_sq) * (sin * v / v50).sqrt();
    let speed = v * (1.0 - loss);
    if speed <= 0.0 {
        return None;
    }

    Some(Rebound {
        speed,
        exit_angle: MALLEABLE_EXIT_ANGLE_DEG.to_radians(),
    })
}

/// Unyielding law: never penetrates, grazing exit.
fn unyielding_rebound(speed: f64, alpha: f64) -> Rebound {
    let sin = alpha.sin();
    Rebound {
        speed: speed * (1.0 - sin * sin / 2.0),
        exit_angle: UNYIELDING_EXIT_ANGLE_DEG.to_radians(),
    }
}

/// Critical angle for a frangible or liquid target, or None when the
/// projectile always digs in.
///
/// With `r = ρt/ρp`, hardness energy fraction `e = Yt / (Yt + Yref)`:
/// `p = k·√r·(1 + e)`, `q = (ρp/ρt)·g·d·c`, `θc = atan(p + √(p² − q))`.
pub fn frangible_critical_angle(projectile: &ProjectileState, target: &MaterialProperties) -> Option<f64> {
    if target.density <= 0.0 {
        return None;
    }
    let r = target.density / projectile.density;
    let hardness = target.hardness.max(0.0);
    let energy = hardness / (hardness + FRANGIBLE_HARDNESS_REFERENCE);
    let p = FRANGIBLE_LIFT_FACTOR * r.sqrt() * (1.0 + energy);
    let diameter_m = projectile.diameter_mm / 1000.0;
    let q = GRAVITY * diameter_m * FRANGIBLE_SINK_FACTOR / r;
    let discriminant = p * p - q;
    if discriminant < 0.0 {
        return None;
    }
    let critical = (p + discriminant.sqrt()).atan();
    (critical > 0.0).then_some(critical)
}

/// Frangible law: speed falls linearly to zero at the critical angle.
fn frangible_rebound<R: Rng + ?Sized>(
    projectile: &ProjectileState,
    target: &MaterialProperties,
    alpha: f64,
    model: AngleModel,
    rng: &mut R,
) -> Option<Rebound> {
    let critical = frangible_critical_angle(projectile, target)?;
    let ratio = alpha / critical;
    let speed = projectile.speed * (1.0 - ratio);
    if speed <= 0.0 {
        return None;
    }

    let exit_angle = match model {
        AngleModel::Blended => alpha * (BLEND_BASE - BLEND_SLOPE * ratio),
        AngleModel::Legacy => {
            if ratio < LEGACY_NEAR_CRITICAL_RATIO {
                alpha
            } else {
                rng.gen_range(alpha..=alpha * BLEND_BASE)
            }
        }
    };

    Some(Rebound { speed, exit_angle })
}

/// Outgoing direction for a ricochet leaving the surface at `exit_angle`.
///
/// Rotates the reversed incident direction by `α + β − 180°` about the axis
/// perpendicular to both the incident direction and the normal, so the result
/// stays in the plane of incidence.
pub fn reflect(direction: DVec3, normal: DVec3, alpha: f64, exit_angle: f64) -> DVec3 {
    let axis = direction
        .cross(normal)
        .try_normalize()
        .unwrap_or_else(|| normal.any_orthonormal_vector());
    let rotation = DQuat::from_axis_angle(axis, alpha + exit_angle - PI);
    (rotation * -direction).normalize()
}

fn ricochet(
    direction: DVec3,
    normal: DVec3,
    alpha: f64,
    incident_speed: f64,
    rebound: Rebound,
) -> BounceOutcome {
    let exit_angle = rebound.exit_angle.clamp(0.0, FRAC_PI_2);
    let out = reflect(direction, normal, alpha, exit_angle);
    BounceOutcome {
        kind: BounceKind::Ricochet,
        new_speed: rebound.speed.min(incident_speed),
        exit_angle,
        deflection_angle: out.z.clamp(-1.0, 1.0).asin(),
        heading_degrees: heading_degrees(out),
        direction: out,
    }
}

fn fragment(direction: DVec3) -> BounceOutcome {
    BounceOutcome {
        kind: BounceKind::Fragment,
        new_speed: 0.0,
        ..BounceOutcome::penetrate(0.0, direction)
    }
}
