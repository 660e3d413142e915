//! Cleanup system: removes spent units and projectiles at end of tick.
//!
//! This is the only place entities leave the world, and the only place
//! the kill bounty is applied exactly once per hostile death, however
//! many attackers contributed.

use hecs::{Entity, World};

use skirmish_core::components::{Health, Projectile, Unit};
use skirmish_core::constants::{DIFFICULTY_PER_KILL, KILL_BOUNTY};
use skirmish_core::enums::{Faction, ProjectilePhase};
use skirmish_core::events::SimEvent;

use crate::engine::RunState;

/// Collect entities whose lifecycle is over, apply death side effects,
/// then despawn. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    run: &mut RunState,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    // Units with spent health. Hostile deaths pay the bounty.
    for (entity, (unit, health)) in world.query_mut::<(&Unit, &Health)>() {
        if health.current <= 0.0 {
            despawn_buffer.push(entity);
            match unit.faction {
                Faction::Enemy => {
                    run.currency += KILL_BOUNTY;
                    run.difficulty += DIFFICULTY_PER_KILL;
                    events.push(SimEvent::HostileSlain {
                        kind: unit.kind,
                        bounty: KILL_BOUNTY,
                    });
                }
                Faction::Ally => {
                    events.push(SimEvent::AllyFallen { kind: unit.kind });
                }
            }
        }
    }

    // Projectiles in a terminal phase.
    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if matches!(
            projectile.phase,
            ProjectilePhase::Hit | ProjectilePhase::Expired
        ) {
            despawn_buffer.push(entity);
        }
    }

    // Despawn collected entities.
    for entity in despawn_buffer.drain(..) {
        let removed = world.despawn(entity);
        debug_assert!(removed.is_ok(), "cleanup despawned a missing entity");
    }
}
