use anyhow::anyhow;
use rand::{rngs::SmallRng, Rng};

use crate::{coord::Coordinate, player::Player, player::TurnView};

/// Automated player that fires uniformly at random over the whole grid.
///
/// It does not remember earlier shots; repeats are refused by the grid and
/// the turn loop simply asks again.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &TurnView<'_>,
    ) -> anyhow::Result<Coordinate> {
        let size = view.target.size() as i32;
        if size == 0 {
            return Err(anyhow!("cannot pick a target on an empty grid"));
        }
        let target = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        log::trace!("ai picked {}", target);
        Ok(target)
    }
}
