//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Identity and combat stats of a living unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Stable id assigned by the engine, unique across a run.
    pub id: u32,
    pub kind: UnitKind,
    pub faction: Faction,
    /// Movement speed in arena units per tick.
    pub speed: f32,
    /// Damage dealt per colliding tick.
    pub attack: f32,
}

/// Health pool, stored in frame-ticks (`health_seconds × TICK_RATE` at creation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    /// Set by any damage taken this tick; surfaced in that tick's snapshot
    /// for the renderer's hit flash, cleared at the next combat pass.
    pub just_damaged: bool,
}

/// Steering state: where the unit is going and how it is getting there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Steering {
    /// Current movement target.
    pub target: Vec2,
    /// Acceleration applied on the last tick.
    pub acc: Vec2,
    /// Heading toward the target in radians, updated every tick.
    pub facing: f32,
}

/// Axis-aligned collision rectangle, centered on the entity's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub size: Vec2,
}

/// Projectile state: fixed flight direction plus lifecycle phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Stable id assigned by the engine, unique across a run.
    pub id: u32,
    pub kind: ProjectileKind,
    /// Damage applied once on impact.
    pub attack: f32,
    /// Flight speed in arena units per tick.
    pub speed: f32,
    /// Flight direction in radians, fixed at spawn.
    pub dir: f32,
    pub phase: ProjectilePhase,
    /// Ticks since detonation began (fireballs in `Exploding`).
    pub explosion_frame: u32,
}

// Position and Velocity are defined in types.rs and used as ECS
// components by the sim crate.
