//! Snapshot system: queries the ECS world and builds a complete RunSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skirmish_core::components::{Health, Projectile, Steering, Unit};
use skirmish_core::enums::GamePhase;
use skirmish_core::events::SimEvent;
use skirmish_core::state::{ProjectileView, RunSnapshot, UnitView};
use skirmish_core::types::{Position, SimTime, Velocity};

use crate::engine::RunState;

/// Build a complete RunSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    run: &RunState,
    events: Vec<SimEvent>,
) -> RunSnapshot {
    RunSnapshot {
        time: *time,
        phase,
        currency: run.currency,
        difficulty: run.difficulty,
        units: build_units(world),
        projectiles: build_projectiles(world),
        events,
    }
}

/// Build the UnitView list from every living unit.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&Unit, &Position, &Velocity, &Steering, &Health)>()
        .iter()
        .map(|(_, (unit, pos, vel, steering, health))| UnitView {
            id: unit.id,
            kind: unit.kind,
            faction: unit.faction,
            position: pos.0,
            facing: steering.facing,
            speed: vel.speed(),
            health_ratio: health.current / health.max,
            damaged: health.just_damaged,
        })
        .collect();

    units.sort_by_key(|u| u.id);
    units
}

/// Build the ProjectileView list from every live projectile.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.id,
            kind: projectile.kind,
            position: pos.0,
            facing: projectile.dir,
            phase: projectile.phase,
            explosion_frame: projectile.explosion_frame,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
