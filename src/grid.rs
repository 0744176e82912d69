//! Grid state: cells, placed vessels, and shot history.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, ShotResult};
use crate::coord::Coordinate;
use crate::vessel::Vessel;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied,
    Miss,
    Hit,
    /// Open water revealed around a destroyed vessel.
    MarginBlocked,
}

/// An N×N battle grid.
///
/// Placement and shooting keep separate exclusion sets: `reserved` holds
/// every vessel cell plus its halo and only gates `place_vessel`, while
/// `exhausted` holds shot history and only gates `resolve_shot`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    hidden: bool,
    cells: Vec<Cell>,
    vessels: Vec<Vessel>,
    reserved: BTreeSet<Coordinate>,
    exhausted: BTreeSet<Coordinate>,
    destroyed: usize,
}

impl Grid {
    /// Create an empty `size`×`size` grid with no vessels.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            hidden: false,
            cells: vec![Cell::Empty; size * size],
            vessels: Vec::new(),
            reserved: BTreeSet::new(),
            exhausted: BTreeSet::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Hidden grids never show un-hit vessel cells when rendered.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Cell state at `c`, or `None` when out of bounds.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    /// All cells in row-major order (`y * size + x`).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels with no health left.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` once every placed vessel is destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.vessels.is_empty() && self.destroyed == self.vessels.len()
    }

    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        self.index(c).is_none()
    }

    /// Returns `true` if a shot at `c` would be rejected as already targeted.
    pub fn is_exhausted(&self, c: Coordinate) -> bool {
        self.exhausted.contains(&c)
    }

    /// Number of coordinates that can no longer be shot at.
    pub fn exhausted_count(&self) -> usize {
        self.exhausted.len()
    }

    /// Place `vessel`, reserving its cells and its one-cell halo.
    ///
    /// Nothing is committed if any cell is out of bounds or reserved.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if let Some(bad) = vessel
            .cells()
            .find(|&c| self.is_out_of_bounds(c) || self.reserved.contains(&c))
        {
            return Err(BoardError::InvalidPlacement(bad));
        }
        for c in vessel.cells() {
            if let Some(i) = self.index(c) {
                self.cells[i] = Cell::Occupied;
            }
            self.reserved.insert(c);
        }
        self.vessels.push(vessel);
        self.compute_margin(&vessel, false);
        Ok(())
    }

    /// Forget all shot history. Called once the fleet is in place.
    pub fn reset_shot_history(&mut self) {
        self.exhausted.clear();
    }

    /// Fire at `c`.
    pub fn resolve_shot(&mut self, c: Coordinate) -> Result<ShotResult, BoardError> {
        let Some(idx) = self.index(c) else {
            return Err(BoardError::OutOfBounds(c));
        };
        if !self.exhausted.insert(c) {
            return Err(BoardError::AlreadyTargeted(c));
        }

        let Some(vi) = self.vessels.iter().position(|v| v.occupies(c)) else {
            self.cells[idx] = Cell::Miss;
            log::trace!("shot at {} missed", c);
            return Ok(ShotResult::Miss);
        };

        self.vessels[vi].apply_hit();
        self.cells[idx] = Cell::Hit;
        let vessel = self.vessels[vi];
        if vessel.is_destroyed() {
            self.destroyed += 1;
            self.compute_margin(&vessel, true);
            log::debug!("vessel {:?} destroyed by shot at {}", vessel, c);
            Ok(ShotResult::Sunk)
        } else {
            log::trace!("shot at {} hit {:?}", c, vessel);
            Ok(ShotResult::Hit)
        }
    }

    /// Add the vessel's cells and their 8-neighbourhood to an exclusion set.
    ///
    /// Without `mark` the halo is only reserved against placement. With
    /// `mark` it joins the shot history and empty cells are painted
    /// `MarginBlocked`.
    fn compute_margin(&mut self, vessel: &Vessel, mark: bool) {
        for cell in vessel.cells() {
            for near in cell.neighbourhood() {
                let Some(i) = self.index(near) else {
                    continue;
                };
                if mark {
                    if self.exhausted.insert(near) && self.cells[i] == Cell::Empty {
                        self.cells[i] = Cell::MarginBlocked;
                    }
                } else {
                    self.reserved.insert(near);
                }
            }
        }
    }

    #[inline]
    fn index(&self, c: Coordinate) -> Option<usize> {
        let in_range = |v: i32| v >= 0 && (v as usize) < self.size;
        if in_range(c.x) && in_range(c.y) {
            Some(c.y as usize * self.size + c.x as usize)
        } else {
            None
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid {{ size: {}, hidden: {}, destroyed: {}/{}, exhausted: {}, vessels: {:?} }}",
            self.size,
            self.hidden,
            self.destroyed,
            self.vessels.len(),
            self.exhausted.len(),
            self.vessels,
        )
    }
}
