//! Run snapshot: the complete visible state sent to the frontend each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete visible state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Spendable summon currency.
    pub currency: u32,
    /// Difficulty scalar; the hostile population target is its rounding.
    pub difficulty: f32,
    /// Living units, sorted by id.
    pub units: Vec<UnitView>,
    /// Live projectiles, sorted by id.
    pub projectiles: Vec<ProjectileView>,
    /// One-shot events since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// A living unit as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: u32,
    pub kind: UnitKind,
    pub faction: Faction,
    pub position: Vec2,
    /// Heading in radians (drives sprite mirroring).
    pub facing: f32,
    /// Velocity magnitude; zero selects the idle pose.
    pub speed: f32,
    /// current / max health, for the health bar.
    pub health_ratio: f32,
    /// True if the unit took damage this tick (hit flash).
    pub damaged: bool,
}

/// A live projectile as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub kind: ProjectileKind,
    pub position: Vec2,
    /// Flight direction in radians, fixed at spawn.
    pub facing: f32,
    pub phase: ProjectilePhase,
    /// Current explosion animation frame (fireballs in `Exploding`).
    pub explosion_frame: u32,
}
