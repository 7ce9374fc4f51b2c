//! Reference projectile host backed by a hecs world.
//!
//! Stands in for the projectile-motion subsystem: holds in-flight projectiles
//! as entities, reports their impacts to the engine and applies the commands
//! that come back.

use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

use ricochet_core::commands::ProjectileCommand;
use ricochet_core::components::{BounceCount, Flight, ProjectileBody};
use ricochet_core::defs::DefDatabase;
use ricochet_core::environment::ImpactEnvironment;
use ricochet_core::events::{ImpactEvent, ImpactedEntity};
use ricochet_core::outcome::ImpactResponse;
use ricochet_core::types::{direction_from_heading, Position, ProjectileState};

use crate::engine::RicochetEngine;

/// In-flight projectiles.
#[derive(Default)]
pub struct ProjectileWorld {
    world: World,
}

impl ProjectileWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, body: ProjectileBody, position: Position, flight: Flight) -> Entity {
        self.world.spawn((body, position, flight, BounceCount::default()))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of live projectiles.
    pub fn len(&self) -> u32 {
        self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Snapshot of an entity's current state as an impact event.
    pub fn impact_event(
        &mut self,
        entity: Entity,
        impacted: ImpactedEntity,
        position: Position,
    ) -> Option<ImpactEvent> {
        let (body, flight) = self
            .world
            .query_one_mut::<(&ProjectileBody, &Flight)>(entity)
            .ok()?;
        Some(ImpactEvent {
            projectile: body.id,
            impacted,
            position,
            direction: direction_from_heading(flight.heading_degrees, flight.vertical_angle),
            state: ProjectileState {
                speed: flight.speed,
                density: body.density,
                hardness: body.hardness,
                diameter_mm: body.diameter_mm,
                mass_g: body.mass_g,
            },
        })
    }

    /// Report an impact for `entity` and apply the engine's command.
    ///
    /// Returns `None` when the entity is not a live projectile.
    #[allow(clippy::too_many_arguments)]
    pub fn impact<R: Rng + ?Sized>(
        &mut self,
        entity: Entity,
        impacted: ImpactedEntity,
        position: Position,
        engine: &RicochetEngine,
        env: Option<&dyn ImpactEnvironment>,
        defs: &DefDatabase,
        rng: &mut R,
    ) -> Option<ImpactResponse> {
        let event = self.impact_event(entity, impacted, position)?;
        let response = engine.handle_impact(&event, env, defs, rng);
        if let Some(command) = &response.command {
            self.apply(entity, command);
        }
        Some(response)
    }

    fn apply(&mut self, entity: Entity, command: &ProjectileCommand) {
        match *command {
            ProjectileCommand::Relaunch {
                x,
                y,
                height,
                vertical_angle,
                heading_degrees,
                speed,
                ..
            } => {
                if let Ok((pos, flight, bounces)) = self
                    .world
                    .query_one_mut::<(&mut Position, &mut Flight, &mut BounceCount)>(entity)
                {
                    *pos = Position::new(x, y, height);
                    *flight = Flight {
                        heading_degrees,
                        vertical_angle,
                        speed,
                    };
                    bounces.0 += 1;
                }
            }
            ProjectileCommand::Destroy { projectile, .. } => {
                debug!(projectile, "projectile destroyed on impact");
                let _ = self.world.despawn(entity);
            }
        }
    }
}
