use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::storage::HighScoreStore;

use super::cell::Cell;
use super::config::GameConfig;
use super::direction::{Command, Direction};
use super::food::Food;
use super::obstacle::Obstacles;
use super::particle::Particle;
use super::snake::Snake;

/// What the snake's head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Edge,
    /// Head hit a non-head body cell
    Tail,
    /// Head hit an obstacle block
    Obstacle,
}

/// What happened during one tick, for the audio adapter and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The snake ate the food this tick
    pub ate_food: bool,
    /// The collision that ended the round, if any
    pub collision: Option<CollisionType>,
}

impl TickOutcome {
    pub fn game_over(&self) -> bool {
        self.collision.is_some()
    }
}

/// The whole game: entities, score, and the active/paused/over state machine
///
/// Owns the snake, food, obstacles, and particles exclusively. Entities are
/// reset in place on game over rather than rebuilt. All mutation happens in
/// `tick` or in the command handlers; the renderer only reads.
pub struct Game {
    pub config: GameConfig,
    pub snake: Snake,
    pub food: Food,
    pub obstacles: Obstacles,
    pub particles: Vec<Particle>,
    /// False once a round has ended, until the reset command
    pub running: bool,
    /// Freezes ticks without touching any other state
    pub paused: bool,
    pub score: u32,
    /// Score snapshot taken when the last round ended
    pub final_score: u32,
    /// Best score ever, backed by the store
    pub highest_score: u32,
    /// Set exactly when the last round strictly beat the stored best
    pub new_high_score: bool,
    /// At most one accepted direction change per tick
    move_accepted: bool,
    store: HighScoreStore,
    rng: StdRng,
}

impl Game {
    /// Create a game, loading the persisted high score
    pub fn new(config: GameConfig, store: HighScoreStore) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Create a game with a caller-supplied RNG (deterministic placement)
    pub fn with_rng(config: GameConfig, store: HighScoreStore, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::new(&mut rng, config.cell_count, &snake.body);
        let mut obstacles = Obstacles::new();
        obstacles.regenerate(
            &mut rng,
            config.cell_count,
            config.obstacle_attempts,
            &snake.body,
        );
        let highest_score = store.load();

        Self {
            config,
            snake,
            food,
            obstacles,
            particles: Vec::new(),
            running: true,
            paused: false,
            score: 0,
            final_score: 0,
            highest_score,
            new_high_score: false,
            move_accepted: false,
            store,
            rng,
        }
    }

    /// Apply an input command; commands take effect immediately
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => {
                self.turn(direction);
            }
            Command::TogglePause => self.toggle_pause(),
            Command::ConfirmReset => self.restart(),
        }
    }

    /// Change direction, rejecting reversals and second turns within a tick.
    /// Returns whether the turn was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.move_accepted || self.snake.direction.is_opposite(direction) {
            return false;
        }
        self.snake.direction = direction;
        self.move_accepted = true;
        true
    }

    /// Flip the paused flag; nothing else changes
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Start a fresh round: entities reset in place, score zeroed
    pub fn restart(&mut self) {
        self.running = true;
        self.paused = false;
        self.reset_entities();
        self.score = 0;
    }

    /// Advance the simulation by one tick
    ///
    /// Collision checks run in a fixed order after the single movement
    /// advance: food, then edges, then tail/obstacle. Obstacle regeneration
    /// triggered by the food branch happens before the tail/obstacle check,
    /// and its draws exclude the whole body, so a block spawned this tick can
    /// never sit under the head that just ate.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        self.move_accepted = false;

        if !self.running || self.paused {
            return outcome;
        }

        self.snake.advance();

        if self.snake.head() == self.food.position {
            self.food
                .relocate(&mut self.rng, self.config.cell_count, &self.snake.body);
            self.snake.grow();
            self.score += 1;
            self.particles.push(Particle::new(self.snake.head()));
            outcome.ate_food = true;

            if self.score % self.config.obstacle_score_interval == 0 {
                self.obstacles.regenerate(
                    &mut self.rng,
                    self.config.cell_count,
                    self.config.obstacle_attempts,
                    &self.snake.body,
                );
            }
        }

        let head = self.snake.head();
        let collision = if head.is_off_grid(self.config.cell_count) {
            Some(CollisionType::Edge)
        } else if self.snake.collides_with_body(head) {
            Some(CollisionType::Tail)
        } else if self.obstacles.contains(head) {
            Some(CollisionType::Obstacle)
        } else {
            None
        };

        if let Some(collision) = collision {
            self.game_over();
            outcome.collision = Some(collision);
        }

        for particle in &mut self.particles {
            particle.tick();
        }
        self.particles.retain(|p| !p.is_expired());

        outcome
    }

    /// End the round: snapshot the score, persist a new best, reset the
    /// entities, and leave the game stopped and paused until the reset command
    fn game_over(&mut self) {
        self.final_score = self.score;
        if self.score > self.highest_score {
            self.highest_score = self.score;
            self.new_high_score = true;
            self.store.save(self.highest_score);
        } else {
            self.new_high_score = false;
        }

        self.reset_entities();
        self.running = false;
        self.paused = true;
        self.score = 0;
    }

    fn reset_entities(&mut self) {
        self.snake.reset();
        self.food
            .relocate(&mut self.rng, self.config.cell_count, &self.snake.body);
        self.obstacles.regenerate(
            &mut self.rng,
            self.config.cell_count,
            self.config.obstacle_attempts,
            &self.snake.body,
        );
    }
}
