//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; persistent state lives in
//! components and the engine.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod wave_spawner;
