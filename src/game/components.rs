//! Grid value types and the ECS components of effects and the HUD.

use bevy::prelude::*;

/// A cell coordinate on the grid. May lie outside the grid after the snake
/// runs into a wall, so both axes are signed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// The neighbouring cell one step along `direction`.
    pub fn moved(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Direction the snake can travel. Screen coordinates: `Up` is `-y`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit grid vector of this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Maps a directional key (arrows or WASD) to a direction.
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
            KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
            KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
            _ => None,
        }
    }
}

/// State of one grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Empty,
    Food,
}

/// Component for the short-lived flash where food was eaten.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the tick interval display.
#[derive(Component)]
pub struct SpeedText;

/// Component to mark the frame rate display.
#[derive(Component)]
pub struct FpsText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;
