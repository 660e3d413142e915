//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side an entity fights for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Player-summoned units.
    #[default]
    Ally,
    /// Wave-spawned hostiles.
    Enemy,
}

/// Unit roster kind. Stats live in per-kind tables in the sim crate;
/// behavior differences are a dispatch over [`AttackStyle`], not subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    // --- Summonable ally roster ---
    /// Cheap, quick skirmisher.
    Imp,
    /// Fast runner with a deeper health pool.
    Wogol,
    /// Mid-cost bruiser.
    Chort,
    /// Slow heavy hitter.
    BigDemon,

    // --- Hostile roster ---
    /// Archer: never melees, looses arrows.
    Elf,
    /// Baseline melee hostile.
    Knight,
    /// Caster: never melees, hurls fireballs.
    Wizard,
    /// Caster: never melees, raises skeletons.
    Necromancer,
    /// Melee minion raised by necromancers.
    Skeleton,
    /// Elite melee hostile, unlocked at difficulty 3.0.
    ElvenKnight,
    /// Champion melee hostile, unlocked at difficulty 5.0.
    Kingsguard,
}

/// Projectile roster kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Fast, light; removed on the tick it hits.
    Arrow,
    /// Heavy; detonates on impact and lingers for the explosion window.
    Fireball,
}

/// Projectile lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectilePhase {
    /// In flight along its fixed direction.
    #[default]
    Flying,
    /// Struck an allied unit; despawned by cleanup the same tick.
    Hit,
    /// Post-impact detonation animation (fireballs only). Stationary,
    /// deals no further damage.
    Exploding,
    /// Left the arena or finished detonating; despawned by cleanup.
    Expired,
}

/// How a unit resolves its attack each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Rectangle-overlap damage against every overlapping opposing unit.
    Melee,
    /// Never melees; a 1-in-`window` roll each tick launches a projectile
    /// at the unit's position and facing.
    Ranged { projectile: ProjectileKind, window: u32 },
    /// Never melees; a 1-in-`window` roll each tick raises a minion near
    /// the unit's position.
    Summoner { minion: UnitKind, window: u32 },
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
}
