use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset cell by delta
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell in a direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// True if the cell lies outside a square grid of the given side length.
    /// The snake only ever ends up one step past the edge, so -1 and
    /// `cell_count` are the only off-grid coordinates that occur in practice.
    pub fn is_off_grid(&self, cell_count: i32) -> bool {
        self.x == -1 || self.x == cell_count || self.y == -1 || self.y == cell_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_offset() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.offset(1, 0), Cell::new(6, 5));
        assert_eq!(cell.offset(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.offset(0, 1), Cell::new(5, 6));
        assert_eq!(cell.offset(0, -1), Cell::new(5, 4));
    }

    #[test]
    fn test_step_in_direction() {
        let cell = Cell::new(3, 3);
        assert_eq!(cell.step(Direction::Up), Cell::new(3, 2));
        assert_eq!(cell.step(Direction::Down), Cell::new(3, 4));
        assert_eq!(cell.step(Direction::Left), Cell::new(2, 3));
        assert_eq!(cell.step(Direction::Right), Cell::new(4, 3));
    }

    #[test]
    fn test_off_grid() {
        assert!(Cell::new(-1, 5).is_off_grid(25));
        assert!(Cell::new(25, 5).is_off_grid(25));
        assert!(Cell::new(5, -1).is_off_grid(25));
        assert!(Cell::new(5, 25).is_off_grid(25));

        assert!(!Cell::new(0, 0).is_off_grid(25));
        assert!(!Cell::new(24, 24).is_off_grid(25));
    }
}
