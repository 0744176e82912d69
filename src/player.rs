use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, ShotResult},
    coord::Coordinate,
    grid::Grid,
};

/// Read-only view handed to a player when it picks a target.
#[derive(Clone, Copy)]
pub struct TurnView<'a> {
    /// The player's own grid.
    pub own: &'a Grid,
    /// The grid being fired upon.
    pub target: &'a Grid,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next coordinate to fire at.
    ///
    /// Only fails when the player cannot produce a target at all, e.g. its
    /// input source was closed.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &TurnView<'_>,
    ) -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) {}

    /// Inform the player that the grid refused its last target.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: BoardError) {}

    /// Inform the player of an opponent shot against its grid.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _result: ShotResult) {}
}
