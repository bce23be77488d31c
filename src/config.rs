//! Startup configuration with compiled-in defaults

use crate::display::Pixel;
use crate::game::Direction;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Everything tunable about a game session: board geometry, timing, colors.
///
/// Defaults give an 800x800 board of 80px cells at 10 ticks per second. A
/// JSON file with any subset of the fields can override them at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub segment_size: i32,
    pub snake_padding: i32,
    pub food_padding: i32,
    /// Ticks per second. A soft cap: late ticks are dropped, never caught up.
    pub tick_rate: u32,
    /// Shortest body that can physically reach itself.
    pub min_self_collision_len: usize,
    pub initial_direction: Direction,
    pub background_color: Pixel,
    pub snake_color: Pixel,
    pub food_color: Pixel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 800,
            board_height: 800,
            segment_size: 80,
            snake_padding: 3,
            food_padding: 10,
            tick_rate: 10,
            min_self_collision_len: 5,
            initial_direction: Direction::Right,
            background_color: Pixel::new(203, 217, 167, 255),
            snake_color: Pixel::new(19, 118, 194, 255),
            food_color: Pixel::new(19, 179, 194, 255),
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }

    pub fn grid_columns(&self) -> i32 {
        self.board_width / self.segment_size
    }

    pub fn grid_rows(&self) -> i32 {
        self.board_height / self.segment_size
    }

    /// Body length at which the board is completely filled.
    pub fn max_snake_length(&self) -> usize {
        (self.grid_columns() * self.grid_rows()) as usize
    }

    /// Minimum wall-clock time between ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.tick_rate))
    }
}
