use std::collections::VecDeque;

use rand::Rng;

use super::cell::Cell;

/// Static blocking cells, regenerated as the score grows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Obstacles {
    pub blocks: Vec<Cell>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the field and make a fixed number of random draws, keeping only
    /// draws that miss the occupied set. Colliding draws are skipped rather
    /// than retried, so the final count may fall short of `attempts`.
    pub fn regenerate(
        &mut self,
        rng: &mut impl Rng,
        cell_count: i32,
        attempts: usize,
        occupied: &VecDeque<Cell>,
    ) {
        self.blocks.clear();
        for _ in 0..attempts {
            let cell = Cell::new(rng.gen_range(0..cell_count), rng.gen_range(0..cell_count));
            if !occupied.contains(&cell) {
                self.blocks.push(cell);
            }
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.blocks.contains(&cell)
    }
}
