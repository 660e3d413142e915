//! Wave director: holds the hostile population at the difficulty target.
//!
//! No cumulative schedule: whenever the hostile count drops below
//! `round(difficulty)`, exactly one hostile spawns at the arena border.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::Unit;
use skirmish_core::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, CHAMPION_DIFFICULTY, ELITE_DIFFICULTY, ELITE_ROLL_WINDOW,
    SPAWN_EDGE_MARGIN,
};
use skirmish_core::enums::{Faction, UnitKind};
use skirmish_core::events::SimEvent;

use crate::engine::RunState;
use crate::world_setup;

/// Hostile kinds drawn uniformly for an ordinary spawn.
const BASE_KINDS: [UnitKind; 4] = [
    UnitKind::Elf,
    UnitKind::Knight,
    UnitKind::Wizard,
    UnitKind::Necromancer,
];

/// Spawn a single hostile at the border when the population is below the
/// difficulty target. The newcomer targets its own spawn point and idles
/// until a friendly unit exists to acquire.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_unit_id: &mut u32,
    run: &RunState,
    events: &mut Vec<SimEvent>,
) {
    let hostile_count = {
        let mut query = world.query::<&Unit>();
        query
            .iter()
            .filter(|(_, unit)| unit.faction == Faction::Enemy)
            .count()
    };

    if hostile_count >= run.difficulty.round() as usize {
        return;
    }

    let kind = choose_kind(rng, run.difficulty);
    let pos = choose_spawn_position(rng);
    world_setup::spawn_unit(world, next_unit_id, kind, pos);
    events.push(SimEvent::HostileSpawned { kind });
}

/// Draw the hostile kind: uniform over the base roster, then a single
/// override roll once elites are unlocked. The champion branch is checked
/// first, so the stronger override takes precedence.
pub fn choose_kind(rng: &mut ChaCha8Rng, difficulty: f32) -> UnitKind {
    let mut kind = BASE_KINDS[rng.gen_range(0..BASE_KINDS.len())];

    if difficulty >= ELITE_DIFFICULTY {
        let roll = rng.gen_range(1..=ELITE_ROLL_WINDOW);
        if difficulty >= CHAMPION_DIFFICULTY && roll == 1 {
            kind = UnitKind::Kingsguard;
        } else if roll <= 2 {
            kind = UnitKind::ElvenKnight;
        }
    }

    kind
}

/// Draw a spawn position on the arena border: a full-height column when
/// `x` lands within the margin of the left or right edge, otherwise the
/// top or bottom band with equal probability.
pub fn choose_spawn_position(rng: &mut ChaCha8Rng) -> Vec2 {
    let x = rng.gen_range(0.0..=ARENA_WIDTH);
    let y = if x <= SPAWN_EDGE_MARGIN || x >= ARENA_WIDTH - SPAWN_EDGE_MARGIN {
        rng.gen_range(0.0..=ARENA_HEIGHT)
    } else if rng.gen_bool(0.5) {
        rng.gen_range(0.0..=SPAWN_EDGE_MARGIN)
    } else {
        rng.gen_range(ARENA_HEIGHT - SPAWN_EDGE_MARGIN..=ARENA_HEIGHT)
    };
    Vec2::new(x, y)
}
