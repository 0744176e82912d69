//! Text rendering of grids.

use core::fmt;

use crate::coord::Coordinate;
use crate::grid::{Cell, Grid};

impl Cell {
    /// Glyph used when the cell is drawn.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Occupied => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::MarginBlocked => '.',
        }
    }
}

/// Glyph for `c` as a viewer of `grid` should see it.
pub fn visible_glyph(grid: &Grid, c: Coordinate) -> Option<char> {
    grid.cell(c).map(|cell| match cell {
        Cell::Occupied if grid.is_hidden() => Cell::Empty.glyph(),
        other => other.glyph(),
    })
}

/// Column header is x, row label is y, both 1-indexed as typed by players.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size() as i32;
        write!(f, "   |")?;
        for x in 1..=size {
            write!(f, "{:^3}|", x)?;
        }
        for y in 0..size {
            write!(f, "\n{:>2} |", y + 1)?;
            for x in 0..size {
                let glyph = visible_glyph(self, Coordinate::new(x, y)).unwrap_or(' ');
                write!(f, " {} |", glyph)?;
            }
        }
        Ok(())
    }
}
