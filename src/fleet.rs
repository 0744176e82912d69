//! Randomised fleet placement.

use rand::Rng;

use crate::config::{MatchConfig, FLEET};
use crate::coord::Coordinate;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

/// Draw a random vessel of `length` with its bow anywhere on the grid.
///
/// The tail may hang off the edge; `Grid::place_vessel` rejects that.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn random_vessel<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Vessel {
    let size = size as i32;
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let bow = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
    Vessel::new(bow, length, orientation)
}

/// Single attempt at populating a grid with the default fleet.
///
/// Returns `None` if any vessel exhausts `attempts` draws or the grid has no
/// cells.
pub fn try_generate<R: Rng + ?Sized>(rng: &mut R, size: usize, attempts: usize) -> Option<Grid> {
    if size == 0 {
        return None;
    }
    let mut grid = Grid::new(size);
    for &length in FLEET.iter() {
        let mut placed = false;
        for _ in 0..attempts {
            let vessel = random_vessel(rng, size, length);
            match grid.place_vessel(vessel) {
                Ok(()) => {
                    placed = true;
                    break;
                }
                Err(e) => log::trace!("placement rejected: {}", e),
            }
        }
        if !placed {
            log::debug!(
                "no room for vessel of length {} after {} attempts",
                length,
                attempts
            );
            return None;
        }
    }
    grid.reset_shot_history();
    Some(grid)
}

/// Populate a grid with the default fleet, starting over until it fits.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &MatchConfig) -> Grid {
    let mut rounds = 1usize;
    loop {
        if let Some(grid) = try_generate(rng, config.size(), config.placement_attempts()) {
            if rounds > 1 {
                log::info!("fleet placed after {} grid rounds", rounds);
            }
            return grid;
        }
        rounds += 1;
    }
}
