//! Game events (messages).

use bevy::prelude::*;

use super::{GameOverCause, Position};

/// Message triggered when the snake eats food.
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Position,
}

/// Message triggered once when a session ends.
#[derive(Message)]
pub struct GameOverEvent {
    pub cause: GameOverCause,
    pub score: usize,
}
