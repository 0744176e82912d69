//! Vessel definitions: a straight run of cells with a health counter.

use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells advance along x.
    Horizontal,
    /// Cells advance along y.
    Vertical,
}

impl Orientation {
    #[inline]
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A vessel anchored at its bow.
///
/// The vessel knows nothing about grid bounds; the owning `Grid` validates
/// placement and is the only caller of [`Vessel::apply_hit`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

/// Longest run `cells()` can describe with `i32` offsets.
pub const MAX_VESSEL_LENGTH: usize = i32::MAX as usize;

impl Vessel {
    /// Create an undamaged vessel. Length is clamped to
    /// `1..=MAX_VESSEL_LENGTH`.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        let length = length.clamp(1, MAX_VESSEL_LENGTH);
        Self {
            bow,
            length,
            orientation,
            health: length,
        }
    }

    /// Cells occupied by the vessel, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dx * i, dy * i))
    }

    /// Returns `true` if `c` is one of the vessel's cells.
    pub fn occupies(&self, c: Coordinate) -> bool {
        self.cells().any(|cell| cell == c)
    }

    /// Take one point of damage. Health never drops below zero.
    pub fn apply_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn health(&self) -> usize {
        self.health
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ bow: {}, length: {}, orientation: {:?}, health: {} }}",
            self.bow, self.length, self.orientation, self.health,
        )
    }
}
