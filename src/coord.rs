use core::fmt;

/// A position on the grid. `x` is the column, `y` the row, both 0-indexed.
///
/// Values may be negative or past the edge; the grid decides what is in
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The coordinate itself and its eight neighbours.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| self.offset(dx, dy)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
