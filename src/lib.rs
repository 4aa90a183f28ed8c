//! Retro Snake - a terminal snake game with obstacles and a persisted
//! high score
//!
//! This library provides:
//! - Core game logic (game module): movement, collisions, scoring, and the
//!   active/paused/over state machine
//! - High-score persistence (storage module)
//! - Audio trigger port (audio module)
//! - TUI rendering (render module)
//! - Key handling (input module)
//! - The interactive game loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod storage;
