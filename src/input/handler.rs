use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(Command::Turn(Direction::Up)),
            KeyCode::Down => KeyAction::Game(Command::Turn(Direction::Down)),
            KeyCode::Left => KeyAction::Game(Command::Turn(Direction::Left)),
            KeyCode::Right => KeyAction::Game(Command::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Game(Command::Turn(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Game(Command::Turn(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Game(Command::Turn(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Game(Command::Turn(Direction::Right))
            }

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::Game(Command::TogglePause),
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Game(Command::ConfirmReset),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
