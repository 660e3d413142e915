//! Headless demo driver: plays a short scripted run and logs progress.

use std::thread;
use std::time::Duration;

use skirmish_app::game_loop;
use skirmish_app::state::{self, GameLoopCommand};
use skirmish_core::commands::PlayerCommand;
use skirmish_core::enums::{Faction, UnitKind};
use skirmish_sim::engine::SimConfig;

/// Wall-clock speedup for the demo run.
const DEMO_TIME_SCALE: f64 = 4.0;

fn main() {
    env_logger::init();
    log::info!("SKIRMISH headless demo starting at {DEMO_TIME_SCALE}x speed");

    let latest_snapshot = state::shared_snapshot();
    let (commands, game_loop_thread) =
        game_loop::spawn_game_loop(SimConfig::default(), latest_snapshot.clone());

    let send = |cmd: PlayerCommand| {
        commands
            .send(GameLoopCommand::Player(cmd))
            .expect("game loop thread terminated early");
    };

    send(PlayerCommand::StartRun);
    send(PlayerCommand::SetTimeScale {
        scale: DEMO_TIME_SCALE,
    });

    // Poll once per wall-clock second, nudging the band across the arena
    // and spending any bounty on reinforcements.
    for second in 1..=10 {
        thread::sleep(Duration::from_secs(1));

        let snapshot = {
            let lock = latest_snapshot.lock().expect("snapshot slot poisoned");
            lock.clone()
        };
        let Some(snapshot) = snapshot else {
            continue;
        };

        log::info!(
            "t={:.1}s tick={} units={} projectiles={} currency={} difficulty={:.1}",
            snapshot.time.elapsed_secs,
            snapshot.time.tick,
            snapshot.units.len(),
            snapshot.projectiles.len(),
            snapshot.currency,
            snapshot.difficulty
        );

        if second == 2 {
            send(PlayerCommand::SetRallyPoint { x: 400.0, y: 256.0 });
        }
        if snapshot.currency >= 1 {
            send(PlayerCommand::Summon {
                kind: UnitKind::Imp,
            });
        }
    }

    send(PlayerCommand::Pause);

    let final_snapshot = latest_snapshot
        .lock()
        .expect("snapshot slot poisoned")
        .clone();
    if let Some(snapshot) = final_snapshot {
        let allies = snapshot
            .units
            .iter()
            .filter(|u| u.faction == Faction::Ally)
            .count();
        log::info!(
            "Final roster: {} allied, {} hostile, difficulty {:.1}",
            allies,
            snapshot.units.len() - allies,
            snapshot.difficulty
        );
    }

    commands
        .send(GameLoopCommand::Shutdown)
        .expect("game loop thread terminated early");
    game_loop_thread.join().expect("game loop thread panicked");
    log::info!("SKIRMISH headless demo finished");
}
