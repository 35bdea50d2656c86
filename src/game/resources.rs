//! Game resources (singleton state).

use bevy::prelude::*;
use std::fmt;
use std::time::Duration;

use super::{CellState, GameConfig, Position, RandomSource};
use crate::food::spawn_food;
use crate::grid::Grid;
use crate::snake::Snake;

/// Game phase enum to track which state the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// The head ran into another body segment.
    SelfCollision,
    /// The head left the grid.
    Wall,
}

impl fmt::Display for GameOverCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverCause::SelfCollision => f.write_str("ran into itself"),
            GameOverCause::Wall => f.write_str("hit the wall"),
        }
    }
}

/// What a call to [`Game::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick interval has not elapsed yet.
    Waiting,
    /// The session is already over.
    Halted,
    /// The snake moved onto an empty cell.
    Moved,
    /// The snake ate the food at this position.
    Ate(Position),
    /// The session ended during this tick.
    Ended(GameOverCause),
}

/// One game session: grid, snake, timing gate and score.
#[derive(Resource)]
pub struct Game {
    grid: Grid,
    snake: Snake,
    random: Box<dyn RandomSource>,
    speed_interval: Duration,
    min_interval: Duration,
    max_interval: Duration,
    speed_ramp: f32,
    last_tick: Option<Duration>,
    phase: GamePhase,
    cause: Option<GameOverCause>,
    meals: usize,
}

impl Game {
    /// Fresh session: a still snake in the middle of the grid and one food.
    pub fn new(config: &GameConfig, random: impl RandomSource + 'static) -> Self {
        let grid = Grid::new(config.grid_width(), config.grid_height(), config.cell_size);
        let center = Position::new((grid.width() / 2) as i32, (grid.height() / 2) as i32);
        let mut game = Game::from_parts(config, grid, Snake::new(center, None), random);
        let food = spawn_food(&mut game.grid, &game.snake, game.random.as_mut());
        info!(
            "new session on a {}x{} grid, first food at {:?}",
            game.grid.width(),
            game.grid.height(),
            food
        );
        game
    }

    /// Session over an existing grid and snake. No food is placed.
    pub fn from_parts(
        config: &GameConfig,
        grid: Grid,
        snake: Snake,
        random: impl RandomSource + 'static,
    ) -> Self {
        Game {
            grid,
            snake,
            random: Box::new(random),
            speed_interval: config.initial_interval,
            min_interval: config.min_interval,
            max_interval: config.max_interval,
            speed_ramp: config.speed_ramp,
            last_tick: None,
            phase: GamePhase::Running,
            cause: None,
            meals: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase() == GamePhase::GameOver
    }

    /// Why the session ended, once it has.
    pub fn cause(&self) -> Option<GameOverCause> {
        self.cause
    }

    /// The score is the snake's length.
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Food eaten this session.
    pub fn meals(&self) -> usize {
        self.meals
    }

    /// Minimum time between two ticks.
    pub fn speed_interval(&self) -> Duration {
        self.speed_interval
    }

    /// Forwards a key press to the snake while the session runs.
    pub fn handle_input(&mut self, key: KeyCode) -> bool {
        !self.is_over() && self.snake.handle_input(key)
    }

    /// Runs one tick if `speed_interval` has passed since the previous one.
    /// `now` is any monotonic time; the very first call always ticks.
    pub fn update(&mut self, now: Duration) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Halted;
        }
        if let Some(last) = self.last_tick
            && now.saturating_sub(last) < self.speed_interval
        {
            return TickOutcome::Waiting;
        }
        self.last_tick = Some(now);

        self.snake.step();
        let head = self.snake.head();

        let outcome = match self.grid.get(head) {
            None => return self.end(GameOverCause::Wall),
            Some(CellState::Food) => {
                *self.grid.at_mut(head.x as usize, head.y as usize) = CellState::Empty;
                self.snake.grow();
                spawn_food(&mut self.grid, &self.snake, self.random.as_mut());
                self.speed_up();
                self.meals += 1;
                TickOutcome::Ate(head)
            }
            Some(CellState::Empty) => TickOutcome::Moved,
        };

        if self.snake.collides_with_self() {
            return self.end(GameOverCause::SelfCollision);
        }
        outcome
    }

    /// Scales the interval by the speed ramp in whole milliseconds, then clamps.
    fn speed_up(&mut self) {
        let millis = (self.speed_interval.as_millis() as f32 * self.speed_ramp).round() as u64;
        self.speed_interval =
            Duration::from_millis(millis).clamp(self.min_interval, self.max_interval);
    }

    fn end(&mut self, cause: GameOverCause) -> TickOutcome {
        self.phase = GamePhase::GameOver;
        self.cause = Some(cause);
        TickOutcome::Ended(cause)
    }
}
