use std::collections::VecDeque;

use super::cell::Cell;
use super::direction::Direction;

/// The snake: an ordered body of cells with the head at the front
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head first
    pub body: VecDeque<Cell>,
    /// Current direction of movement
    pub direction: Direction,
    /// One-shot flag: the next advance keeps the tail instead of popping it
    pub pending_growth: bool,
}

impl Snake {
    /// Create a snake in the canonical starting configuration
    pub fn new() -> Self {
        Self {
            body: Self::starting_body(),
            direction: Direction::Right,
            pending_growth: false,
        }
    }

    fn starting_body() -> VecDeque<Cell> {
        VecDeque::from([Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)])
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Check if a cell collides with the body, excluding the head
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|&c| c == cell)
    }

    /// Advance one tick: prepend the next head cell, then either consume the
    /// growth flag or drop the tail
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Request growth on the next advance
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Restore the canonical starting body and direction
    pub fn reset(&mut self) {
        self.body = Self::starting_body();
        self.direction = Direction::Right;
        self.pending_growth = false;
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_start() {
        let snake = Snake::new();
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body,
            VecDeque::from([Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)])
        );
        assert_eq!(snake.direction, Direction::Right);
        assert!(!snake.pending_growth);
    }

    #[test]
    fn test_advance_without_growth() {
        let mut snake = Snake::new();
        snake.advance();

        assert_eq!(
            snake.body,
            VecDeque::from([Cell::new(7, 9), Cell::new(6, 9), Cell::new(5, 9)])
        );
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_growth_flag_is_one_shot() {
        let mut snake = Snake::new();
        snake.grow();
        snake.advance();

        assert_eq!(snake.len(), 4);
        assert!(!snake.pending_growth);

        // Next advance pops the tail again
        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_body_collision_excludes_head() {
        let snake = Snake::new();
        assert!(!snake.collides_with_body(Cell::new(6, 9))); // head
        assert!(snake.collides_with_body(Cell::new(5, 9))); // body
        assert!(!snake.collides_with_body(Cell::new(10, 10))); // empty
    }

    #[test]
    fn test_reset_restores_start() {
        let mut snake = Snake::new();
        snake.direction = Direction::Down;
        snake.grow();
        snake.advance();
        snake.advance();

        snake.reset();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 9));
        assert_eq!(snake.direction, Direction::Right);
        assert!(!snake.pending_growth);
    }

    #[test]
    fn test_no_duplicate_cells_while_moving_straight() {
        let mut snake = Snake::new();
        for _ in 0..5 {
            snake.advance();
            let head = snake.head();
            assert!(!snake.collides_with_body(head));
        }
    }
}
