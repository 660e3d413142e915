//! Events emitted by the simulation for audio and UI feedback.
//!
//! Events are drained into each snapshot and carry no gameplay authority.

use serde::{Deserialize, Serialize};

use crate::enums::UnitKind;

/// One-shot events for the frontend sound and notification systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The wave director placed a new hostile at the border.
    HostileSpawned { kind: UnitKind },
    /// A hostile died; the bounty has already been applied.
    HostileSlain { kind: UnitKind, bounty: u32 },
    /// A friendly unit died.
    AllyFallen { kind: UnitKind },
    /// A summon purchase succeeded.
    Summoned { kind: UnitKind, cost: u32 },
    /// A summon purchase was refused for lack of funds.
    SummonDenied { kind: UnitKind, cost: u32, balance: u32 },
}
