//! Core game logic
//!
//! Everything in here is pure game state: no terminal, no timers, no I/O
//! beyond the high-score store owned by the session. The render and input
//! layers talk to it through read-only state and commands.

pub mod cell;
pub mod config;
pub mod direction;
pub mod food;
pub mod obstacle;
pub mod particle;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use cell::Cell;
pub use config::GameConfig;
pub use direction::{Command, Direction};
pub use food::Food;
pub use obstacle::Obstacles;
pub use particle::Particle;
pub use session::{CollisionType, Game, TickOutcome};
pub use snake::Snake;
