use std::collections::VecDeque;

use rand::Rng;

use super::cell::Cell;

/// The single food item on the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Create food at a random cell outside the occupied set
    pub fn new(rng: &mut impl Rng, cell_count: i32, occupied: &VecDeque<Cell>) -> Self {
        Self {
            position: place(rng, cell_count, occupied),
        }
    }

    /// Move the food to a fresh random cell outside the occupied set
    pub fn relocate(&mut self, rng: &mut impl Rng, cell_count: i32, occupied: &VecDeque<Cell>) {
        self.position = place(rng, cell_count, occupied);
    }
}

/// Rejection sampling: draw uniform cells until one misses the occupied set.
/// No retry cap; terminates almost surely as long as the grid has a free cell.
fn place(rng: &mut impl Rng, cell_count: i32, occupied: &VecDeque<Cell>) -> Cell {
    loop {
        let cell = Cell::new(rng.gen_range(0..cell_count), rng.gen_range(0..cell_count));
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_placement_is_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied = VecDeque::new();

        for _ in 0..100 {
            let food = Food::new(&mut rng, 25, &occupied);
            assert!(food.position.x >= 0 && food.position.x < 25);
            assert!(food.position.y >= 0 && food.position.y < 25);
        }
    }

    #[test]
    fn test_placement_avoids_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(42);

        // Occupy every cell of a 3x3 grid except (2, 2)
        let mut occupied = VecDeque::new();
        for x in 0..3 {
            for y in 0..3 {
                if (x, y) != (2, 2) {
                    occupied.push_back(Cell::new(x, y));
                }
            }
        }

        let food = Food::new(&mut rng, 3, &occupied);
        assert_eq!(food.position, Cell::new(2, 2));
    }

    #[test]
    fn test_relocate_avoids_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let occupied = VecDeque::from([Cell::new(0, 0), Cell::new(1, 0)]);

        let mut food = Food::new(&mut rng, 4, &occupied);
        for _ in 0..50 {
            food.relocate(&mut rng, 4, &occupied);
            assert!(!occupied.contains(&food.position));
        }
    }
}
