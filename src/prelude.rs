//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, BoardError, Cell, Coordinate, Grid, Match, MatchConfig, MatchState, Orientation,
    Player, ShotResult, Side, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
