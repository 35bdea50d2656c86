//! Compiled-in game parameters: window, grid, timing, colors and draw layers.

use bevy::prelude::*;
use std::time::Duration;

// Window dimensions (pixels)
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;

// Side of one grid cell (pixels)
pub const CELL_SIZE: u32 = 20;

// Timing
pub const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(500);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(60);
pub const MAX_TICK_INTERVAL: Duration = Duration::from_millis(500);

// Each meal multiplies the tick interval by this factor
pub const SPEED_RAMP: f32 = 0.9;

// Food placement retries before falling back to a scan for a free cell
pub const FOOD_PLACEMENT_ATTEMPTS: usize = 64;

// Colors
pub const EMPTY_CELL_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(0.9, 0.16, 0.22, 1.0);
pub const SNAKE_COLOR: Color = Color::srgba(0.0, 0.89, 0.19, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);
pub const HUD_TEXT_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
pub const FOOD_EATEN_FLASH_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const GAME_OVER_TEXT_COLOR: Color = Color::srgba(1.0, 0.3, 0.3, 1.0);

// Z-index constants for rendering layers
pub const Z_GRID: f32 = 0.0;
pub const Z_SNAKE: f32 = 1.0;
pub const Z_EFFECT: f32 = 2.0;
