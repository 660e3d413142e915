//! State shared between the driver and the game loop thread.

use std::sync::{Arc, Mutex};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::RunSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest-snapshot slot, shared with the game loop thread.
///
/// The loop overwrites the slot after every tick. Readers only ever want
/// the newest state, so a single slot stands in for a queue.
pub type SharedSnapshot = Arc<Mutex<Option<RunSnapshot>>>;

/// Create an empty snapshot slot.
pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let slot = shared_snapshot();
        assert!(slot.lock().unwrap().is_none());
    }
}
