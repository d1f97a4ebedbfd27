//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ekko_core::commands::{InputFrame, PlayerCommand};
use ekko_core::enums::GamePhase;
use ekko_core::events::FeedbackEvent;
use ekko_core::state::GameStateSnapshot;
use ekko_core::types::{Position, SimTime};
use ekko_impact::tuning::{JumpTuning, LandingTuning, WaveTuning};
use ekko_level::demo::demo_level;
use ekko_level::level::LevelDef;

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

/// All tunable feel parameters, bundled so tests can vary them.
#[derive(Default)]
pub struct Tuning {
    pub jump: JumpTuning,
    pub landing: LandingTuning,
    pub wave: WaveTuning,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    level: LevelDef,
    tuning: Tuning,
    input: InputFrame,
    respawn_point: Position,
    respawn_timer: Option<f64>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<FeedbackEvent>,
}

impl SimulationEngine {
    /// Create a new engine running the built-in demo level.
    pub fn new(config: SimConfig) -> Self {
        Self::with_level(config, demo_level())
    }

    /// Create a new engine with an explicit level.
    pub fn with_level(config: SimConfig, level: LevelDef) -> Self {
        let respawn_point = level.spawn;
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            level,
            tuning: Tuning::default(),
            input: InputFrame::default(),
            respawn_point,
            respawn_timer: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
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
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
            // Edges are one tick wide; holds persist until the next frame.
            self.input.jump_pressed = false;
            self.input.jump_released = false;
            self.input.control_fall_pressed = false;
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.tuning.wave,
            events,
        )
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

    /// Get the active respawn point.
    pub fn respawn_point(&self) -> Position {
        self.respawn_point
    }

    /// Mutable tuning access for feel experiments.
    #[cfg(test)]
    pub fn tuning_mut(&mut self) -> &mut Tuning {
        &mut self.tuning
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
            PlayerCommand::Input { frame } => {
                self.input = frame;
            }
            PlayerCommand::StartLevel => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::LevelComplete) {
                    self.world.clear();
                    world_setup::setup_level(&mut self.world, &self.level);
                    world_setup::scatter_ambient_scenery(
                        &mut self.world,
                        &mut self.rng,
                        &self.level,
                    );
                    self.respawn_point = self.level.spawn;
                    self.respawn_timer = None;
                    self.input = InputFrame::default();
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
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.phase = GamePhase::MainMenu;
                self.time = SimTime::default();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Input intent, jump timers, jump fire and cut
        systems::player_input::run(&mut self.world, &self.input, &self.time, &self.tuning.jump);
        // 2. Movement integration and ground resolve
        let touchdown =
            systems::movement::run(&mut self.world, &self.level, &self.time, &self.tuning.jump);
        // 3. Landing classification, wave emission, reactive triggers
        systems::landing::run(
            &mut self.world,
            touchdown,
            &self.time,
            &self.tuning.landing,
            &self.tuning.wave,
            &mut self.events,
        );
        // 4. Wave expansion, reveal scan, enemy alerting
        systems::wave::run(&mut self.world, &self.time, &mut self.events);
        // 5. Enemy FSM, pursuit, contact damage
        systems::enemy::run(&mut self.world, &self.time, &mut self.events);
        // 6. Trigger zones and the kill floor
        systems::zones::run(
            &mut self.world,
            &self.level,
            &mut self.phase,
            &mut self.respawn_point,
            &mut self.events,
        );
        // 7. Light wells and reveal pulses
        systems::light_well::run(&mut self.world, &self.time, &self.tuning.wave, &mut self.events);
        // 8. Revealable fade lifecycle
        systems::reveal::run(&mut self.world);
        // 9. Reactive platform motion
        systems::platforms::run(&mut self.world);
        // 10. Light bookkeeping, death, respawn
        systems::health::run(
            &mut self.world,
            &mut self.respawn_timer,
            self.respawn_point,
            &mut self.events,
        );
        // 11. Cleanup (faded waves, out-of-bounds entities)
        systems::cleanup::run(&mut self.world, &self.time, &mut self.despawn_buffer);
    }
}
