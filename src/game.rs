use alloc::boxed::Box;

use anyhow::anyhow;
use rand::rngs::SmallRng;

use crate::{
    common::ShotResult,
    config::MatchConfig,
    coord::Coordinate,
    fleet,
    grid::Grid,
    player::{Player, TurnView},
};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }
}

/// Turn-loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchState {
    UserTurn,
    OpponentTurn,
    UserWon,
    OpponentWon,
}

impl MatchState {
    fn turn_of(side: Side) -> Self {
        match side {
            Side::User => MatchState::UserTurn,
            Side::Opponent => MatchState::OpponentTurn,
        }
    }

    /// Side due to fire, or `None` once the match is over.
    pub fn to_move(self) -> Option<Side> {
        match self {
            MatchState::UserTurn => Some(Side::User),
            MatchState::OpponentTurn => Some(Side::Opponent),
            MatchState::UserWon | MatchState::OpponentWon => None,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            MatchState::UserWon => Some(Side::User),
            MatchState::OpponentWon => Some(Side::Opponent),
            MatchState::UserTurn | MatchState::OpponentTurn => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.winner().is_some()
    }
}

/// A shot the target grid accepted, plus how many targets it refused first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub result: ShotResult,
    pub rejected: usize,
}

/// Outcome of a single [`Match::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub side: Side,
    pub shot: Shot,
    /// State after the shot was applied.
    pub state: MatchState,
}

/// Final or running tally of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Option<Side>,
    pub size: usize,
    pub turns: usize,
    pub user_shots: usize,
    pub opponent_shots: usize,
    /// Opponent vessels destroyed by the user.
    pub user_destroyed: usize,
    /// User vessels destroyed by the opponent.
    pub opponent_destroyed: usize,
}

/// Let `player` fire at `target` until the grid accepts a shot.
///
/// Out-of-bounds and repeated targets are reported back to the player and a
/// new target is requested. Only a failure of the player itself ends the
/// loop early.
pub fn take_turn(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    own: &Grid,
    target: &mut Grid,
) -> anyhow::Result<Shot> {
    let mut rejected = 0;
    loop {
        let view = TurnView {
            own,
            target: &*target,
        };
        let coord = player.select_target(rng, &view)?;
        match target.resolve_shot(coord) {
            Ok(result) => {
                player.handle_shot_result(coord, result);
                return Ok(Shot {
                    target: coord,
                    result,
                    rejected,
                });
            }
            Err(e) if e.is_shot_rejection() => {
                log::debug!("shot rejected: {}", e);
                player.handle_rejected_shot(coord, e);
                rejected += 1;
            }
            Err(e) => return Err(anyhow!(e)),
        }
    }
}

/// A match between a user side and an opponent side.
pub struct Match {
    user_grid: Grid,
    opponent_grid: Grid,
    user: Box<dyn Player>,
    opponent: Box<dyn Player>,
    state: MatchState,
    rng: SmallRng,
    turns: usize,
    user_shots: usize,
    opponent_shots: usize,
}

impl Match {
    /// Generate both fleets and set up a match with the user to move.
    ///
    /// The opponent grid is hidden unless the config reveals it.
    pub fn new(
        config: &MatchConfig,
        user: Box<dyn Player>,
        opponent: Box<dyn Player>,
        mut rng: SmallRng,
    ) -> Self {
        let user_grid = fleet::generate(&mut rng, config);
        let mut opponent_grid = fleet::generate(&mut rng, config);
        opponent_grid.set_hidden(!config.reveal_opponent());
        log::debug!("user grid: {:?}", user_grid);
        log::debug!("opponent grid: {:?}", opponent_grid);
        Self::from_grids(user_grid, opponent_grid, user, opponent, rng)
    }

    /// Set up a match over already populated grids.
    pub fn from_grids(
        user_grid: Grid,
        opponent_grid: Grid,
        user: Box<dyn Player>,
        opponent: Box<dyn Player>,
        rng: SmallRng,
    ) -> Self {
        Self {
            user_grid,
            opponent_grid,
            user,
            opponent,
            state: MatchState::UserTurn,
            rng,
            turns: 0,
            user_shots: 0,
            opponent_shots: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn user_grid(&self) -> &Grid {
        &self.user_grid
    }

    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent_grid
    }

    /// Number of accepted shots so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Let the side to move fire once and advance the state.
    ///
    /// A hit or a sink keeps the turn, a miss hands it over. Fails if the
    /// match is already decided or the shooting player fails.
    pub fn step(&mut self) -> anyhow::Result<TurnRecord> {
        let Some(side) = self.state.to_move() else {
            return Err(anyhow!("match is already finished"));
        };

        let (shooter, defender, own, target) = match side {
            Side::User => (
                &mut self.user,
                &mut self.opponent,
                &self.user_grid,
                &mut self.opponent_grid,
            ),
            Side::Opponent => (
                &mut self.opponent,
                &mut self.user,
                &self.opponent_grid,
                &mut self.user_grid,
            ),
        };
        let shot = take_turn(&mut **shooter, &mut self.rng, own, target)?;
        defender.handle_opponent_shot(shot.target, shot.result);

        self.turns += 1;
        match side {
            Side::User => self.user_shots += 1,
            Side::Opponent => self.opponent_shots += 1,
        }

        let next = if shot.result.grants_extra_turn() {
            side
        } else {
            side.other()
        };
        self.state = if self.opponent_grid.all_destroyed() {
            MatchState::UserWon
        } else if self.user_grid.all_destroyed() {
            MatchState::OpponentWon
        } else {
            MatchState::turn_of(next)
        };
        log::debug!(
            "{:?} fired at {} -> {:?}, now {:?}",
            side,
            shot.target,
            shot.result,
            self.state
        );

        Ok(TurnRecord {
            side,
            shot,
            state: self.state,
        })
    }

    /// Step until one fleet is gone and return the winner.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.state.winner() {
                log::info!("{:?} won after {} turns", winner, self.turns);
                return Ok(winner);
            }
            self.step()?;
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: self.state.winner(),
            size: self.user_grid.size(),
            turns: self.turns,
            user_shots: self.user_shots,
            opponent_shots: self.opponent_shots,
            user_destroyed: self.opponent_grid.destroyed_count(),
            opponent_destroyed: self.user_grid.destroyed_count(),
        }
    }
}
