use super::cell::Cell;

/// How much lifespan a particle loses per tick
pub const PARTICLE_DECAY: f32 = 0.05;

/// A fading visual effect pinned to the cell where food was eaten
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub cell: Cell,
    pub lifespan: f32,
}

impl Particle {
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            lifespan: 1.0,
        }
    }

    /// Decay one step
    pub fn tick(&mut self) {
        self.lifespan -= PARTICLE_DECAY;
    }

    pub fn is_expired(&self) -> bool {
        self.lifespan <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_full_lifespan() {
        let particle = Particle::new(Cell::new(3, 4));
        assert_eq!(particle.lifespan, 1.0);
        assert!(!particle.is_expired());
    }

    #[test]
    fn test_decays_by_fixed_step() {
        let mut particle = Particle::new(Cell::new(0, 0));
        particle.tick();
        assert!((particle.lifespan - 0.95).abs() < f32::EPSILON);
    }

    #[test]
    fn test_expires_after_twenty_ticks() {
        let mut particle = Particle::new(Cell::new(0, 0));
        for _ in 0..19 {
            particle.tick();
            assert!(!particle.is_expired());
        }
        particle.tick();
        assert!(particle.is_expired());
    }

    #[test]
    fn test_cell_is_fixed() {
        let mut particle = Particle::new(Cell::new(7, 2));
        particle.tick();
        particle.tick();
        assert_eq!(particle.cell, Cell::new(7, 2));
    }
}
