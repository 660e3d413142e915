//! Player commands sent from the UI to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::UnitKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Battle orders ---
    /// Order every living friendly unit to move toward (x, y).
    /// Coordinates are clamped to the arena.
    SetRallyPoint { x: f32, y: f32 },
    /// Buy a unit of the given kind at the staging position.
    /// A no-op when currency < cost or the kind is not summonable.
    Summon { kind: UnitKind },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal).
    SetTimeScale { scale: f64 },
    /// Start a new run from the main menu.
    StartRun,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
