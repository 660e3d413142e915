//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `RunSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{Steering, Unit};
use skirmish_core::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, STAGING_X, STAGING_Y, STARTING_CURRENCY, STARTING_DIFFICULTY,
};
use skirmish_core::enums::{Faction, GamePhase, UnitKind};
use skirmish_core::events::SimEvent;
use skirmish_core::state::RunSnapshot;
use skirmish_core::types::SimTime;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// Currency and difficulty for the current run.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Spendable summon currency.
    pub currency: u32,
    /// Population target scalar; the wave director holds the hostile
    /// count at its rounding. Only ever increases.
    pub difficulty: f32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            currency: STARTING_CURRENCY,
            difficulty: STARTING_DIFFICULTY,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    next_projectile_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    run: RunState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_unit_id: 0,
            next_projectile_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            run: RunState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> RunSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.run, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Activate a run without spawning the starting band (for scenario tests).
    #[cfg(test)]
    pub fn start_empty_run(&mut self) {
        self.run = RunState::default();
        self.phase = GamePhase::Active;
        self.time = SimTime::default();
    }

    /// Spawn a unit with its roster stats (for tests).
    #[cfg(test)]
    pub fn spawn_test_unit(&mut self, kind: UnitKind, pos: Vec2) -> hecs::Entity {
        world_setup::spawn_unit(&mut self.world, &mut self.next_unit_id, kind, pos)
    }

    /// Spawn a unit with explicit stats (for scenario tests needing
    /// off-roster health or attack values).
    #[cfg(test)]
    pub fn spawn_test_unit_with(
        &mut self,
        kind: UnitKind,
        faction: Faction,
        pos: Vec2,
        stats: &world_setup::KindStats,
    ) -> hecs::Entity {
        world_setup::spawn_unit_with(
            &mut self.world,
            &mut self.next_unit_id,
            kind,
            faction,
            pos,
            stats,
        )
    }

    /// Set the spendable currency (for summon tests).
    #[cfg(test)]
    pub fn set_test_currency(&mut self, currency: u32) {
        self.run.currency = currency;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if self.phase == GamePhase::MainMenu {
                    world_setup::spawn_starting_band(&mut self.world, &mut self.next_unit_id);
                    self.run = RunState::default();
                    self.phase = GamePhase::Active;
                    self.time = SimTime::default();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.1, 10.0);
            }
            PlayerCommand::SetRallyPoint { x, y } => {
                let rally = Vec2::new(x.clamp(0.0, ARENA_WIDTH), y.clamp(0.0, ARENA_HEIGHT));
                for (_entity, (unit, steering)) in
                    self.world.query_mut::<(&Unit, &mut Steering)>()
                {
                    if unit.faction == Faction::Ally {
                        steering.target = rally;
                    }
                }
            }
            PlayerCommand::Summon { kind } => self.summon(kind),
        }
    }

    /// Buy a unit: spend currency and place it at the staging point.
    /// A short balance refuses the purchase and emits `SummonDenied`;
    /// kinds without a price are ignored.
    fn summon(&mut self, kind: UnitKind) {
        let Some(cost) = world_setup::kind_stats(kind).cost else {
            return;
        };
        if self.run.currency >= cost {
            self.run.currency -= cost;
            world_setup::spawn_unit(
                &mut self.world,
                &mut self.next_unit_id,
                kind,
                Vec2::new(STAGING_X, STAGING_Y),
            );
            self.events.push(SimEvent::Summoned { kind, cost });
        } else {
            self.events.push(SimEvent::SummonDenied {
                kind,
                cost,
                balance: self.run.currency,
            });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave director (population maintenance)
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_unit_id,
            &self.run,
            &mut self.events,
        );
        // 2. Damage flags from the previous tick expire
        systems::combat::clear_damage_flags(&mut self.world);
        // 3. Target acquisition, steering, integration
        systems::movement::run(&mut self.world);
        // 4. Melee damage, ranged/summoner rolls, spawn requests
        systems::combat::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_unit_id,
            &mut self.next_projectile_id,
        );
        // 5. Projectile flight, bounds, impact, detonation
        systems::projectiles::run(&mut self.world);
        // 6. Cleanup (dead units, spent projectiles, bounty)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.run,
            &mut self.events,
        );
    }
}
