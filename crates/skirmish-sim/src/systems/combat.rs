//! Combat resolution: melee rectangle scan plus ranged/summoner dispatch.
//!
//! Collects attacker records and fire/summon rolls in a read-only pass,
//! then applies damage and spawn requests after iteration completes, so
//! every unit resolves against the same post-movement state.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Health, Hitbox, Steering, Unit};
use skirmish_core::constants::MINION_JITTER;
use skirmish_core::enums::{AttackStyle, Faction, ProjectileKind, UnitKind};
use skirmish_core::types::{Position, Rect};

use crate::world_setup;

/// One attacker's rectangle, struck against every overlapping opposing unit.
struct Strike {
    faction: Faction,
    rect: Rect,
    attack: f32,
}

/// A world mutation requested during the read-only pass.
enum SpawnRequest {
    Projectile {
        kind: ProjectileKind,
        pos: Vec2,
        dir: f32,
    },
    Minion {
        kind: UnitKind,
        pos: Vec2,
    },
}

/// Reset every unit's transient damage flag. Runs once per tick, before
/// any damage source.
pub fn clear_damage_flags(world: &mut World) {
    for (_entity, health) in world.query_mut::<&mut Health>() {
        health.just_damaged = false;
    }
}

/// Run combat: collect melee strikes and ranged/summoner rolls, sum strike
/// damage per victim, then apply the collected spawn requests.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    next_projectile_id: &mut u32,
) {
    let mut strikes: Vec<Strike> = Vec::new();
    let mut requests: Vec<SpawnRequest> = Vec::new();

    // Collection pass. Rolls happen every tick for every ranged/summoner
    // unit, in roster order, whether or not anything is in range.
    {
        let mut query = world.query::<(&Unit, &Position, &Hitbox, &Steering)>();
        for (_entity, (unit, pos, hitbox, steering)) in query.iter() {
            match world_setup::kind_stats(unit.kind).style {
                AttackStyle::Melee => {
                    strikes.push(Strike {
                        faction: unit.faction,
                        rect: Rect::from_center(pos.0, hitbox.size),
                        attack: unit.attack,
                    });
                }
                AttackStyle::Ranged { projectile, window } => {
                    if rng.gen_range(1..=window) == 1 {
                        requests.push(SpawnRequest::Projectile {
                            kind: projectile,
                            pos: pos.0,
                            dir: steering.facing,
                        });
                    }
                }
                AttackStyle::Summoner { minion, window } => {
                    if rng.gen_range(1..=window) == 1 {
                        let jitter = Vec2::new(
                            rng.gen_range(-MINION_JITTER..=MINION_JITTER),
                            rng.gen_range(-MINION_JITTER..=MINION_JITTER),
                        );
                        requests.push(SpawnRequest::Minion {
                            kind: minion,
                            pos: pos.0 + jitter,
                        });
                    }
                }
            }
        }
    }

    // Damage pass: every unit takes the summed attack of all opposing
    // strikes whose rectangle strictly overlaps its own.
    for (_entity, (unit, pos, hitbox, health)) in
        world.query_mut::<(&Unit, &Position, &Hitbox, &mut Health)>()
    {
        let rect = Rect::from_center(pos.0, hitbox.size);
        for strike in &strikes {
            if strike.faction != unit.faction && strike.rect.intersects(&rect) {
                health.current -= strike.attack;
                health.just_damaged = true;
            }
        }
    }

    // Spawn pass: requests collected above hit the world only now.
    for request in requests {
        match request {
            SpawnRequest::Projectile { kind, pos, dir } => {
                world_setup::spawn_projectile(world, next_projectile_id, kind, pos, dir);
            }
            SpawnRequest::Minion { kind, pos } => {
                world_setup::spawn_unit(world, next_unit_id, kind, pos);
            }
        }
    }
}
