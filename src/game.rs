use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{self, Collision};
use crate::config::{GameConfig, GridSize};
use crate::fruit::Fruit;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// `Running` is the only non-terminal status; once any other status is
/// reached the simulation stops advancing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    SelfCollision,
    WallCollision,
    Won,
}

impl GameStatus {
    /// Returns true for the three game-ending statuses.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Self::Running
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Fruit,
    pub score: u32,
    pub status: GameStatus,
    pub tick_count: u64,
    direction: Option<Direction>,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state with an entropy-seeded fruit spawner.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let start = Position {
            row: i32::from(config.grid.height / 2),
            col: i32::from(config.grid.width / 2),
        };
        let snake = Snake::new(start);
        let fruit = Fruit::spawn(&mut rng, config.grid);

        Self {
            snake,
            fruit,
            score: 0,
            status: GameStatus::Running,
            tick_count: 0,
            direction: None,
            config,
            rng,
        }
    }

    /// Advances the simulation by one logic step.
    ///
    /// Order per tick: movement, collision classification (which ends the
    /// tick on a hit), growth, win check. Before the first direction input
    /// the step is a complete no-op. Pacing is the caller's concern; see
    /// [`tick_interval_for_score`].
    pub fn tick(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        let Some(direction) = self.direction else {
            return;
        };

        self.tick_count += 1;
        self.snake.advance(direction);

        match collision::classify(&self.snake, self.config.grid) {
            Some(Collision::Wall) => {
                self.status = GameStatus::WallCollision;
                return;
            }
            Some(Collision::Body) => {
                self.status = GameStatus::SelfCollision;
                return;
            }
            None => {}
        }

        if self.snake.head() == self.fruit.position {
            self.eat_fruit();
        }

        if self.score >= self.config.win_score {
            self.status = GameStatus::Won;
        }
    }

    /// Scores the fruit, grows the snake and respawns the fruit, all within
    /// the current tick.
    fn eat_fruit(&mut self) {
        self.score += self.config.fruit_points;
        // At max length the fruit is still consumed; only growth is skipped.
        self.snake.grow_tail(self.config.max_snake_length);
        self.fruit = Fruit::spawn(&mut self.rng, self.config.grid);
    }

    /// Applies one external input event.
    ///
    /// Direction requests opposite to the current direction are dropped, so
    /// the snake can never fold onto its own neck. Quit and Confirm are
    /// handled by the outer loop and ignored here.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(requested) => {
                if self.status.is_terminal() {
                    return;
                }
                if let Some(current) = self.direction {
                    if !direction_change_is_valid(current, requested) {
                        return;
                    }
                }
                self.direction = Some(requested);
            }
            GameInput::Quit | GameInput::Confirm => {}
        }
    }

    /// Returns the current movement direction, `None` before the first input.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns the grid the session is played on.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.config.grid
    }

    /// Returns true while the board is waiting for the first direction key.
    #[must_use]
    pub fn awaiting_first_input(&self) -> bool {
        self.status == GameStatus::Running && self.direction.is_none()
    }

    /// Returns the pacing interval for the current score.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        tick_interval_for_score(self.score)
    }
}

/// Difficulty ramp: the delay between ticks shrinks as the score grows.
#[must_use]
pub fn tick_interval_for_score(score: u32) -> Duration {
    let ms = match score {
        0..=24 => 250,
        25..=49 => 200,
        50..=74 => 150,
        _ => 100,
    };

    Duration::from_millis(ms)
}
