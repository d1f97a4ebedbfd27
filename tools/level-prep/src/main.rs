//! level-prep: level file validation and authoring tool.
//!
//! Usage:
//!   level-prep validate caverns.json
//!   level-prep stats caverns.json
//!   level-prep demo --output demo.json

use std::path::{Path, PathBuf};
use std::process;

use ekko_core::components::ZoneKind;
use ekko_level::demo::demo_level;
use ekko_level::level::LevelDef;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "validate" => cmd_validate(&args[2..]),
        "stats" => cmd_stats(&args[2..]),
        "demo" => cmd_demo(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "level-prep: EKKO level preprocessing tool\n\
         \n\
         Commands:\n\
         \n\
         validate  Check a level file and report every problem\n\
         \n\
           level-prep validate <level.json>\n\
         \n\
         stats     Print a summary of a level's contents\n\
         \n\
           level-prep stats <level.json>\n\
         \n\
         demo      Write the built-in demo level as JSON\n\
         \n\
           level-prep demo --output <path>\n"
    );
}

fn parse_output(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--output" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn load_level(args: &[String]) -> LevelDef {
    let Some(path) = args.first() else {
        eprintln!("Error: a level file path is required");
        process::exit(1);
    };
    match LevelDef::load(Path::new(path)) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error loading {path}: {e}");
            process::exit(1);
        }
    }
}

// --- Validate command ---

fn cmd_validate(args: &[String]) {
    let level = load_level(args);
    let errors = level.validation_errors();

    if errors.is_empty() {
        println!("OK: {}", level.name);
        return;
    }

    eprintln!("{} problem(s) in {}:", errors.len(), level.name);
    for error in &errors {
        eprintln!("  - {error}");
    }
    process::exit(1);
}

// --- Stats command ---

fn cmd_stats(args: &[String]) {
    let level = load_level(args);

    let reactive = level
        .platforms
        .iter()
        .filter(|p| p.reactive.is_some())
        .count();
    let checkpoints = level
        .zones
        .iter()
        .filter(|z| z.kind == ZoneKind::Checkpoint)
        .count();

    println!("level:       {}", level.name);
    println!("spawn:       ({}, {})", level.spawn.x, level.spawn.y);
    println!("floor_y:     {}", level.floor_y);
    println!("platforms:   {} ({reactive} reactive)", level.platforms.len());
    println!("zones:       {} ({checkpoints} checkpoints)", level.zones.len());
    println!("revealables: {}", level.revealables.len());
    println!("light wells: {}", level.light_wells.len());
    println!("enemies:     {}", level.enemies.len());
}

// --- Demo command ---

fn cmd_demo(args: &[String]) {
    let output = match parse_output(args) {
        Some(p) => p,
        None => {
            eprintln!("Error: --output <path> is required");
            process::exit(1);
        }
    };

    let level = demo_level();
    let json = match level.to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing demo level: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = std::fs::write(&output, json) {
        eprintln!("Error writing {}: {e}", output.display());
        process::exit(1);
    }
    println!("Wrote {}", output.display());
}
