//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces RunSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skirmish_core as core;
