#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod coord;
pub mod fleet;
mod game;
mod grid;
pub mod input;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
pub mod render;
mod vessel;

pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use game::*;
pub use grid::{Cell, Grid};
pub use input::{parse_target, InputError};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use vessel::{Orientation, Vessel, MAX_VESSEL_LENGTH};
