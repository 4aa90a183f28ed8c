/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Command the game accepts from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change the snake's direction
    Turn(Direction),
    /// Flip the paused flag
    TogglePause,
    /// Start a fresh round (confirm key on the game-over screen)
    ConfirmReset,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Turn(direction)
    }
}
