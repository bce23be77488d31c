// Allow unused code for designed-but-not-yet-used APIs
#![allow(dead_code)]

mod config;
mod display;
mod game;
mod geometry;
mod renderer;
mod util;

use config::GameConfig;
use display::{Display, GameKey, InputEvent, RenderTarget};
use game::Game;
use renderer::Renderer;
use std::time::Instant;
use util::Rng;

/// Parse command line arguments and return (config path, vsync)
fn parse_args() -> (Option<String>, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path = None;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: slither [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --config PATH, -c PATH  Load game settings from a JSON file");
                println!("  --no-vsync              Disable VSync");
                println!("  --help                  Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (config_path, vsync)
}

fn main() -> Result<(), String> {
    let (config_path, vsync) = parse_args();

    let config = match config_path {
        Some(path) => GameConfig::load(&path).unwrap_or_else(|e| {
            eprintln!("Failed to load {}: {} - using defaults", path, e);
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };

    let width = config.board_width as u32;
    let height = config.board_height as u32;
    let tick_interval = config.tick_interval();

    let (mut display, texture_creator) = Display::new("slither", width, height, vsync)?;
    let mut target = RenderTarget::new(&texture_creator, width, height)?;
    let mut renderer = Renderer::new(config.board_width, config.board_height);
    let mut game = Game::new(config, Rng::seeded_from_clock());

    println!("=== slither ===");
    println!(
        "Board: {}x{} ({}x{} cells), {} ticks/sec",
        width,
        height,
        game.config().grid_columns(),
        game.config().grid_rows(),
        game.config().tick_rate
    );
    println!("Controls:");
    println!("  W/A/S/D or arrows - Steer");
    println!("  Space             - Pause / resume");
    println!("  Escape            - Quit");

    let mut last_tick = Instant::now();

    'main: loop {
        // Direction and pause changes apply as soon as events arrive; only
        // the simulation step below is gated by the tick clock.
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(GameKey::Escape) => break 'main,
                InputEvent::KeyDown(key) => game.handle_key(key),
                InputEvent::KeyUp(_) | InputEvent::MouseMove { .. } => {},
            }
        }

        // Soft tick cap: late ticks are dropped, never caught up
        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();

            if game.tick(&mut renderer) {
                display.present(&mut target, renderer.image_data())?;
            }
        }
    }

    Ok(())
}
