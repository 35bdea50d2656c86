//! Core game module: the session aggregate plus shared types, resources, events and constants.

mod components;
mod config;
mod constants;
mod events;
mod random;
mod resources;

pub use components::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use random::*;
pub use resources::*;
