//! Audio collaborator: the game reports one-shot sound triggers, the mode
//! layer forwards them to whichever sink is installed.

use std::io::{self, Write};

/// One-shot sound triggers emitted by game events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    /// The snake ate the food
    FoodEaten,
    /// The snake hit a wall, its tail, or an obstacle
    Collision,
    /// Reserved trigger; no current game event produces it
    PowerUp,
}

/// Where sound triggers go
pub trait AudioSink {
    fn play(&mut self, event: SoundEvent);
}

/// Rings the terminal bell for gameplay sounds
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, event: SoundEvent) {
        match event {
            SoundEvent::FoodEaten | SoundEvent::Collision => {
                let mut stderr = io::stderr();
                let _ = stderr.write_all(b"\x07");
                let _ = stderr.flush();
            }
            SoundEvent::PowerUp => {}
        }
    }
}

/// Discards all sound triggers
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: SoundEvent) {}
}
