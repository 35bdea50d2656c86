//! Food placement.

use bevy::prelude::*;

use crate::game::{CellState, FOOD_PLACEMENT_ATTEMPTS, Position, RandomSource};
use crate::grid::Grid;
use crate::snake::Snake;

/// Puts one food on a random free cell and returns where it landed.
///
/// A cell is free when it is empty and not under the snake. Random draws are
/// retried a bounded number of times; after that the grid is scanned from the
/// last draw onwards. Returns `None` when no free cell is left.
pub fn spawn_food(
    grid: &mut Grid,
    snake: &Snake,
    random: &mut dyn RandomSource,
) -> Option<Position> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return None;
    }

    let mut last = Position::default();
    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        last = Position::new(
            pick(random.unit(), width) as i32,
            pick(random.unit(), height) as i32,
        );
        if is_free(grid, snake, last) {
            return Some(place(grid, last));
        }
    }

    let start = last.x as usize + last.y as usize * width;
    let total = width * height;
    let free = (0..total)
        .map(|offset| (start + offset) % total)
        .map(|index| Position::new((index % width) as i32, (index / width) as i32))
        .find(|pos| is_free(grid, snake, *pos));

    match free {
        Some(pos) => Some(place(grid, pos)),
        None => {
            warn!("no free cell left for food");
            None
        }
    }
}

fn is_free(grid: &Grid, snake: &Snake, pos: Position) -> bool {
    grid.get(pos) == Some(CellState::Empty) && !snake.body().contains(&pos)
}

/// `floor(unit * len)`, kept in range when rounding lands on `len`.
fn pick(unit: f32, len: usize) -> usize {
    ((unit * len as f32).floor() as usize).min(len - 1)
}

fn place(grid: &mut Grid, pos: Position) -> Position {
    debug!("spawn_food: ({}, {})", pos.x, pos.y);
    *grid.at_mut(pos.x as usize, pos.y as usize) = CellState::Food;
    pos
}
