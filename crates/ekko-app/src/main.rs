//! Headless demo driver.
//!
//! Runs the game loop on the demo level (or a level file given as the
//! first argument), scripts a short run, and prints feedback events as
//! JSON lines.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ekko_app::game_loop::spawn_game_loop;
use ekko_app::state::{AppState, GameLoopCommand};
use ekko_core::commands::{InputFrame, PlayerCommand};
use ekko_core::enums::GamePhase;
use ekko_level::level::LevelDef;

/// Wall-clock budget for the scripted run.
const RUN_BUDGET: Duration = Duration::from_secs(20);

fn main() -> io::Result<()> {
    let level = match std::env::args().nth(1) {
        Some(path) => {
            let level = LevelDef::load(Path::new(&path))?;
            level.validate()?;
            Some(level)
        }
        None => None,
    };

    let state = AppState::new();
    let tx = spawn_game_loop(level, Arc::clone(&state.latest_snapshot), |snapshot| {
        for event in &snapshot.events {
            if let Ok(json) = serde_json::to_string(event) {
                println!("{{\"tick\":{},\"event\":{json}}}", snapshot.time.tick);
            }
        }
    });
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx.clone());
    }
    if let Ok(mut running) = state.running.lock() {
        *running = true;
    }
    let latest = Arc::clone(&state.latest_snapshot);

    let send = |cmd: PlayerCommand| {
        tx.send(GameLoopCommand::PlayerCommand(cmd)).ok();
    };
    let input = |frame: InputFrame| {
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Input { frame }))
            .ok();
    };

    send(PlayerCommand::StartLevel);
    send(PlayerCommand::SetTimeScale { scale: 2.0 });

    // Scripted run: walk right, hop, slam, keep going.
    let script: &[(u64, InputFrame)] = &[
        (0, InputFrame { move_x: 1.0, ..Default::default() }),
        (1500, InputFrame { move_x: 1.0, jump_pressed: true, ..Default::default() }),
        (1600, InputFrame { move_x: 1.0, ..Default::default() }),
        (2500, InputFrame { move_x: 1.0, jump_pressed: true, ..Default::default() }),
        (2700, InputFrame { move_x: 1.0, down_held: true, ..Default::default() }),
        (3500, InputFrame { move_x: 1.0, ..Default::default() }),
        (5000, InputFrame { move_x: 1.0, jump_pressed: true, ..Default::default() }),
        (5200, InputFrame { move_x: 1.0, control_fall_pressed: true, ..Default::default() }),
        (5400, InputFrame { move_x: 1.0, ..Default::default() }),
    ];

    let start = Instant::now();
    let mut next_step = 0;

    while start.elapsed() < RUN_BUDGET {
        let elapsed_ms = start.elapsed().as_millis() as u64;
        while next_step < script.len() && script[next_step].0 <= elapsed_ms {
            input(script[next_step].1);
            next_step += 1;
        }

        let done = latest
            .lock()
            .ok()
            .and_then(|lock| lock.as_ref().map(|s| s.phase == GamePhase::LevelComplete))
            .unwrap_or(false);
        if done {
            println!("level complete");
            break;
        }

        std::thread::sleep(Duration::from_millis(20));
    }

    tx.send(GameLoopCommand::Shutdown).ok();
    std::thread::sleep(Duration::from_millis(50));
    Ok(())
}
