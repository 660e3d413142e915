//! Entity spawn factories and the fixed per-kind stat tables.
//!
//! Creates units and projectiles with appropriate component bundles.
//! All roster numbers live here; behavior differences are carried by
//! [`AttackStyle`], not by subtypes.

use glam::Vec2;
use hecs::World;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::*;
use skirmish_core::types::{Position, Velocity};

/// Fixed roster stats for one unit kind.
#[derive(Debug, Clone)]
pub struct KindStats {
    pub faction: Faction,
    /// Movement speed in arena units per tick.
    pub speed: f32,
    /// Health in seconds of survival under 1.0 attack per tick.
    pub health_secs: f32,
    /// Damage dealt per colliding tick (melee kinds).
    pub attack: f32,
    /// Collision rectangle size, centered on the unit.
    pub hitbox: Vec2,
    pub style: AttackStyle,
    /// Summon price; hostile kinds are not purchasable.
    pub cost: Option<u32>,
}

/// Fixed stats for one projectile kind.
#[derive(Debug, Clone)]
pub struct ProjectileStats {
    /// Flight speed in arena units per tick.
    pub speed: f32,
    /// Damage applied once on impact.
    pub attack: f32,
    pub hitbox: Vec2,
}

/// The roster table. Looked up by kind everywhere stats are needed.
pub fn kind_stats(kind: UnitKind) -> KindStats {
    match kind {
        UnitKind::Imp => KindStats {
            faction: Faction::Ally,
            speed: 2.0,
            health_secs: 2.0,
            attack: 1.0,
            hitbox: Vec2::new(16.0, 16.0),
            style: AttackStyle::Melee,
            cost: Some(1),
        },
        UnitKind::Wogol => KindStats {
            faction: Faction::Ally,
            speed: 4.0,
            health_secs: 4.0,
            attack: 1.0,
            hitbox: Vec2::new(16.0, 16.0),
            style: AttackStyle::Melee,
            cost: Some(3),
        },
        UnitKind::Chort => KindStats {
            faction: Faction::Ally,
            speed: 3.0,
            health_secs: 6.0,
            attack: 2.0,
            hitbox: Vec2::new(16.0, 16.0),
            style: AttackStyle::Melee,
            cost: Some(5),
        },
        UnitKind::BigDemon => KindStats {
            faction: Faction::Ally,
            speed: 1.0,
            health_secs: 10.0,
            attack: 3.0,
            hitbox: Vec2::new(32.0, 36.0),
            style: AttackStyle::Melee,
            cost: Some(9),
        },
        UnitKind::Elf => KindStats {
            faction: Faction::Enemy,
            speed: 1.0,
            health_secs: 1.0,
            attack: 1.0,
            hitbox: Vec2::new(16.0, 28.0),
            style: AttackStyle::Ranged {
                projectile: ProjectileKind::Arrow,
                window: 2 * TICK_RATE,
            },
            cost: None,
        },
        UnitKind::Knight => KindStats {
            faction: Faction::Enemy,
            speed: 1.5,
            health_secs: 2.0,
            attack: 1.0,
            hitbox: Vec2::new(16.0, 28.0),
            style: AttackStyle::Melee,
            cost: None,
        },
        UnitKind::Wizard => KindStats {
            faction: Faction::Enemy,
            speed: 1.0,
            health_secs: 1.0,
            attack: 1.0,
            hitbox: Vec2::new(16.0, 28.0),
            style: AttackStyle::Ranged {
                projectile: ProjectileKind::Fireball,
                window: 4 * TICK_RATE,
            },
            cost: None,
        },
        UnitKind::Necromancer => KindStats {
            faction: Faction::Enemy,
            speed: 1.0,
            health_secs: 1.0,
            attack: 1.0,
            hitbox: Vec2::new(16.0, 20.0),
            style: AttackStyle::Summoner {
                minion: UnitKind::Skeleton,
                window: 3 * TICK_RATE,
            },
            cost: None,
        },
        UnitKind::Skeleton => KindStats {
            faction: Faction::Enemy,
            speed: 1.0,
            health_secs: 1.0,
            attack: 1.0,
            hitbox: Vec2::new(16.0, 16.0),
            style: AttackStyle::Melee,
            cost: None,
        },
        UnitKind::ElvenKnight => KindStats {
            faction: Faction::Enemy,
            speed: 2.0,
            health_secs: 10.0,
            attack: 3.0,
            hitbox: Vec2::new(16.0, 28.0),
            style: AttackStyle::Melee,
            cost: None,
        },
        UnitKind::Kingsguard => KindStats {
            faction: Faction::Enemy,
            speed: 1.0,
            health_secs: 20.0,
            attack: 5.0,
            hitbox: Vec2::new(16.0, 28.0),
            style: AttackStyle::Melee,
            cost: None,
        },
    }
}

/// The projectile table.
pub fn projectile_stats(kind: ProjectileKind) -> ProjectileStats {
    match kind {
        ProjectileKind::Arrow => ProjectileStats {
            speed: 3.0,
            attack: 1.0,
            hitbox: Vec2::new(6.0, 6.0),
        },
        ProjectileKind::Fireball => ProjectileStats {
            speed: 3.0,
            attack: 5.0,
            hitbox: Vec2::new(24.0, 24.0),
        },
    }
}

/// Spawn a unit of the given kind with its roster stats, at rest on `pos`.
pub fn spawn_unit(
    world: &mut World,
    next_id: &mut u32,
    kind: UnitKind,
    pos: Vec2,
) -> hecs::Entity {
    let stats = kind_stats(kind);
    spawn_unit_with(world, next_id, kind, stats.faction, pos, &stats)
}

/// Spawn a unit with explicit stats. Scenario tests use this for
/// off-roster health and attack values.
pub fn spawn_unit_with(
    world: &mut World,
    next_id: &mut u32,
    kind: UnitKind,
    faction: Faction,
    pos: Vec2,
    stats: &KindStats,
) -> hecs::Entity {
    let id = *next_id;
    *next_id += 1;

    // Health-seconds convert to frame-ticks at creation.
    let health = stats.health_secs * TICK_RATE as f32;

    world.spawn((
        Unit {
            id,
            kind,
            faction,
            speed: stats.speed,
            attack: stats.attack,
        },
        Health {
            current: health,
            max: health,
            just_damaged: false,
        },
        Position(pos),
        Velocity::default(),
        Steering {
            target: pos,
            acc: Vec2::ZERO,
            facing: 0.0,
        },
        Hitbox { size: stats.hitbox },
    ))
}

/// Spawn a projectile at `pos` flying along `dir` (radians).
pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u32,
    kind: ProjectileKind,
    pos: Vec2,
    dir: f32,
) -> hecs::Entity {
    let stats = projectile_stats(kind);
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Projectile {
            id,
            kind,
            attack: stats.attack,
            speed: stats.speed,
            dir,
            phase: ProjectilePhase::Flying,
            explosion_frame: 0,
        },
        Position(pos),
        Velocity::default(),
        Hitbox { size: stats.hitbox },
    ))
}

/// Spawn the initial friendly band: five imps at the staging point and at
/// ±offset on each axis, each at rest on its own spawn position.
pub fn spawn_starting_band(world: &mut World, next_id: &mut u32) {
    let center = Vec2::new(STAGING_X, STAGING_Y);
    let offsets = [
        Vec2::ZERO,
        Vec2::new(-STARTING_BAND_OFFSET, 0.0),
        Vec2::new(STARTING_BAND_OFFSET, 0.0),
        Vec2::new(0.0, -STARTING_BAND_OFFSET),
        Vec2::new(0.0, STARTING_BAND_OFFSET),
    ];
    for offset in offsets {
        spawn_unit(world, next_id, UnitKind::Imp, center + offset);
    }
}
