use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// Immutable once constructed; the session and the renderer both read from
/// the same copy instead of free-standing globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub cell_count: i32,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Random draws made per obstacle regeneration
    pub obstacle_attempts: usize,
    /// Obstacles regenerate whenever the score is a positive multiple of this
    pub obstacle_score_interval: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_count: 25,
            tick_interval_ms: 200,
            obstacle_attempts: 5,
            obstacle_score_interval: 5,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom grid side length
    pub fn new(cell_count: i32) -> Self {
        Self {
            cell_count,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
