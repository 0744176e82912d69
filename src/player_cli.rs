#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::string::String;

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, ShotResult},
    coord::Coordinate,
    input::parse_target,
    player::{Player, TurnView},
};

/// Coordinate as the user types it: 1-indexed `x y`.
pub fn coord_to_string(c: Coordinate) -> String {
    format!("{} {}", c.x + 1, c.y + 1)
}

fn result_message(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "Miss!",
        ShotResult::Hit => "Ship hit!",
        ShotResult::Sunk => "Ship destroyed!",
    }
}

/// Human player reading targets from a line-based input.
pub struct CliPlayer<R = StdinLock<'static>, W = Stdout> {
    input: R,
    output: W,
}

impl CliPlayer {
    /// Player on the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a line parses as a coordinate pair.
    fn read_target(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Enter shot coordinates (x y): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before a target was entered");
            }
            match parse_target(&line) {
                Ok(c) => return Ok(c),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _view: &TurnView<'_>,
    ) -> anyhow::Result<Coordinate> {
        self.read_target()
    }

    fn handle_shot_result(&mut self, _target: Coordinate, result: ShotResult) {
        let _ = writeln!(self.output, "{}", result_message(result));
    }

    fn handle_rejected_shot(&mut self, _target: Coordinate, error: BoardError) {
        let _ = writeln!(self.output, "{}", error);
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, result: ShotResult) {
        let _ = writeln!(
            self.output,
            "Computer fires at {} -> {}",
            coord_to_string(target),
            result_message(result)
        );
    }
}
