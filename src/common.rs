//! Common types for the battle: shot results and grid errors.

use core::fmt;

use crate::coord::Coordinate;

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a vessel that still has health left.
    Hit,
    /// Shot struck the last healthy cell of a vessel.
    Sunk,
}

impl ShotResult {
    /// Whether the shooter fires again. Anything but a miss keeps the turn.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Shot coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// Coordinate was already shot at (or revealed around a destroyed vessel).
    AlreadyTargeted(Coordinate),
    /// Vessel leaves the grid or touches another vessel or its halo.
    InvalidPlacement(Coordinate),
}

impl BoardError {
    /// Errors a player recovers from by choosing another target.
    pub fn is_shot_rejection(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_)
        )
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => {
                write!(f, "Shot at {} is outside the board", c)
            }
            BoardError::AlreadyTargeted(c) => {
                write!(f, "You have already shot at {}", c)
            }
            BoardError::InvalidPlacement(c) => {
                write!(f, "Vessel cannot be placed over {}", c)
            }
        }
    }
}

impl core::error::Error for BoardError {}
