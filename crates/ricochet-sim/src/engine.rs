//! Impact orchestration.
//!
//! `RicochetEngine` validates an impact event, resolves the surface and its
//! material, runs the solver and turns the outcome into a command for the
//! projectile-motion host. Holds no per-impact state, so one engine can serve
//! any number of impacts.

use rand::Rng;
use tracing::{debug, error, warn};

use ricochet_core::commands::ProjectileCommand;
use ricochet_core::defs::DefDatabase;
use ricochet_core::enums::{BounceKind, DiagnosticLevel, ImpactClass};
use ricochet_core::environment::ImpactEnvironment;
use ricochet_core::events::{Diagnostic, ImpactAnomaly, ImpactContext, ImpactEvent, ImpactedEntity};
use ricochet_core::outcome::{BounceOutcome, ImpactResponse, MaterialProperties};
use ricochet_core::types::ProjectileId;
use ricochet_geometry::{resolve_normal, SurfaceContact};
use ricochet_material::{unyielding_fallback, MaterialModel, MaterialSubject};

use crate::config::RicochetConfig;
use crate::solver::RicochetSolver;

/// The ricochet pipeline entry point.
#[derive(Debug, Clone, Default)]
pub struct RicochetEngine {
    config: RicochetConfig,
    solver: RicochetSolver,
}

impl RicochetEngine {
    pub fn new(config: RicochetConfig) -> Self {
        let solver = RicochetSolver::new(&config);
        Self { config, solver }
    }

    /// Resolve one impact.
    ///
    /// Never fails: invalid input is recorded as a warning diagnostic and the
    /// projectile penetrates with no command issued.
    pub fn handle_impact<R: Rng + ?Sized>(
        &self,
        event: &ImpactEvent,
        env: Option<&dyn ImpactEnvironment>,
        defs: &DefDatabase,
        rng: &mut R,
    ) -> ImpactResponse {
        let mut diagnostics = Vec::new();

        let (ctx, env, contact) = match validate(event, env, &self.config) {
            Ok(validated) => validated,
            Err(anomaly) => {
                record(&mut diagnostics, event.projectile, anomaly);
                return ImpactResponse {
                    outcome: BounceOutcome::penetrate(event.state.speed, fallback_direction(event)),
                    command: None,
                    diagnostics,
                };
            }
        };

        let material = self.material_for(&ctx, &contact, env, defs, rng);
        debug!(
            projectile = ctx.projectile,
            class = ?contact.class,
            ?material,
            "impact classified"
        );

        let solution = self.solver.solve(&ctx, contact.normal, &material, rng);
        if let Some(anomaly) = solution.anomaly {
            record(&mut diagnostics, ctx.projectile, anomaly);
        }

        let outcome = solution.outcome;
        debug!(
            projectile = ctx.projectile,
            kind = ?outcome.kind,
            new_speed = outcome.new_speed,
            exit_deg = outcome.exit_angle.to_degrees(),
            "impact solved"
        );

        ImpactResponse {
            command: command_for(&ctx, &outcome),
            outcome,
            diagnostics,
        }
    }

    fn material_for<R: Rng + ?Sized>(
        &self,
        ctx: &ImpactContext,
        contact: &SurfaceContact,
        env: &dyn ImpactEnvironment,
        defs: &DefDatabase,
        rng: &mut R,
    ) -> MaterialProperties {
        let model = MaterialModel::new(defs).with_max_depth(self.config.max_classify_depth);

        let subject = match (&ctx.impacted, contact.class) {
            (ImpactedEntity::SolidObject(thing), _) => defs.thing(&thing.def).map(MaterialSubject::Thing),
            (_, ImpactClass::Roof) => env
                .roof_at(&ctx.position)
                .and_then(|cell| defs.roof(&cell.roof))
                .map(MaterialSubject::Roof),
            _ => env
                .terrain_at(&ctx.position)
                .and_then(|name| defs.terrain(name))
                .map(MaterialSubject::Terrain),
        };

        match subject {
            Some(subject) => model.classify(subject, rng),
            None => {
                warn!(
                    projectile = ctx.projectile,
                    impacted = ?ctx.impacted,
                    "no def for impacted surface, assuming unyielding"
                );
                unyielding_fallback()
            }
        }
    }
}

/// Check the event against the environment and resolve the contact surface.
fn validate<'e>(
    event: &ImpactEvent,
    env: Option<&'e dyn ImpactEnvironment>,
    config: &RicochetConfig,
) -> Result<(ImpactContext, &'e dyn ImpactEnvironment, SurfaceContact), ImpactAnomaly> {
    let env = env.ok_or_else(|| ImpactAnomaly::InvalidEnvironment {
        reason: "no environment supplied".into(),
    })?;
    let ctx = ImpactContext::from_event(event)?;
    if !env.contains(&ctx.position) {
        return Err(ImpactAnomaly::InvalidEnvironment {
            reason: format!(
                "impact at ({:.2}, {:.2}, {:.2}) is outside the map",
                ctx.position.x, ctx.position.y, ctx.position.z
            ),
        });
    }
    let contact = resolve_normal(&ctx.impacted, &ctx.position, env, &config.tolerances())?;
    Ok((ctx, env, contact))
}

fn record(diagnostics: &mut Vec<Diagnostic>, projectile: ProjectileId, anomaly: ImpactAnomaly) {
    let diagnostic = Diagnostic::new(projectile, anomaly);
    match diagnostic.level {
        DiagnosticLevel::Warning => warn!(projectile, "{}", diagnostic.anomaly),
        DiagnosticLevel::Error => error!(projectile, "{}", diagnostic.anomaly),
    }
    diagnostics.push(diagnostic);
}

/// Direction reported on rejected events. Falls back to straight down when
/// the reported one cannot be normalized.
fn fallback_direction(event: &ImpactEvent) -> glam::DVec3 {
    event.direction.try_normalize().unwrap_or(glam::DVec3::NEG_Z)
}

fn command_for(ctx: &ImpactContext, outcome: &BounceOutcome) -> Option<ProjectileCommand> {
    match outcome.kind {
        BounceKind::Penetrate => None,
        BounceKind::Ricochet => Some(ProjectileCommand::Relaunch {
            projectile: ctx.projectile,
            x: ctx.position.x,
            y: ctx.position.y,
            height: ctx.position.z,
            vertical_angle: outcome.deflection_angle,
            heading_degrees: outcome.heading_degrees,
            speed: outcome.new_speed,
        }),
        BounceKind::Fragment => Some(ProjectileCommand::Destroy {
            projectile: ctx.projectile,
            position: ctx.position,
        }),
    }
}
