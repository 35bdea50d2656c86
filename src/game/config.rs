//! Session parameters and their startup validation.

use bevy::prelude::*;
use std::time::Duration;
use thiserror::Error;

use super::constants::{
    CELL_SIZE, INITIAL_TICK_INTERVAL, MAX_TICK_INTERVAL, MIN_TICK_INTERVAL, SPEED_RAMP,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};

/// Reasons the compiled-in parameters cannot start a session.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("window {width}x{height} is not a multiple of the {cell_size}px cell size")]
    UnevenWindow {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("grid needs at least one cell")]
    EmptyGrid,
    #[error("minimum tick interval {min:?} exceeds maximum {max:?}")]
    InvertedIntervals { min: Duration, max: Duration },
    #[error("initial tick interval {initial:?} lies outside {min:?}..={max:?}")]
    InitialIntervalOutOfRange {
        initial: Duration,
        min: Duration,
        max: Duration,
    },
    #[error("speed ramp {0} must lie strictly between 0 and 1")]
    InvalidSpeedRamp(f32),
}

/// Parameters of one game session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub initial_interval: Duration,
    pub min_interval: Duration,
    pub max_interval: Duration,
    pub speed_ramp: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            initial_interval: INITIAL_TICK_INTERVAL,
            min_interval: MIN_TICK_INTERVAL,
            max_interval: MAX_TICK_INTERVAL,
            speed_ramp: SPEED_RAMP,
        }
    }
}

impl GameConfig {
    /// Default timing on a `width x height` grid of default-sized cells.
    #[cfg(test)]
    pub fn for_grid(width: u32, height: u32) -> Self {
        GameConfig {
            window_width: width * CELL_SIZE,
            window_height: height * CELL_SIZE,
            ..Default::default()
        }
    }

    /// Grid columns.
    pub fn grid_width(&self) -> usize {
        (self.window_width / self.cell_size.max(1)) as usize
    }

    /// Grid rows.
    pub fn grid_height(&self) -> usize {
        (self.window_height / self.cell_size.max(1)) as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.window_width % self.cell_size != 0 || self.window_height % self.cell_size != 0 {
            return Err(ConfigError::UnevenWindow {
                width: self.window_width,
                height: self.window_height,
                cell_size: self.cell_size,
            });
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.min_interval > self.max_interval {
            return Err(ConfigError::InvertedIntervals {
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        if !(self.min_interval..=self.max_interval).contains(&self.initial_interval) {
            return Err(ConfigError::InitialIntervalOutOfRange {
                initial: self.initial_interval,
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        if !(self.speed_ramp > 0.0 && self.speed_ramp < 1.0) {
            return Err(ConfigError::InvalidSpeedRamp(self.speed_ramp));
        }
        Ok(())
    }
}
