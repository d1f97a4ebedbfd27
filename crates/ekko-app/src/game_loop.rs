//! Game loop thread — runs the simulation engine at 60Hz and hands each
//! snapshot to a caller-supplied sink.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go through the
//! sink callback (the frontend wires this to its event transport) and are
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use ekko_core::constants::TICK_RATE;
use ekko_core::state::GameStateSnapshot;
use ekko_level::level::LevelDef;
use ekko_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// `level` overrides the built-in demo level. Returns the command sender
/// for the frontend layer to use.
pub fn spawn_game_loop(
    level: Option<LevelDef>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    on_snapshot: impl Fn(&GameStateSnapshot) + Send + 'static,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("ekko-game-loop".into())
        .spawn(move || {
            run_game_loop(level, cmd_rx, &latest_snapshot, on_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    level: Option<LevelDef>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    on_snapshot: impl Fn(&GameStateSnapshot),
) {
    let mut engine = match level {
        Some(level) => SimulationEngine::with_level(SimConfig::default(), level),
        None => SimulationEngine::new(SimConfig::default()),
    };
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the frontend sink
        on_snapshot(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
