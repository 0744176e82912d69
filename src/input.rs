//! Parsing of typed shot coordinates.

use alloc::string::{String, ToString};
use core::fmt;

use crate::coord::Coordinate;

/// Reasons a line of input was not accepted as a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Line did not hold exactly two tokens.
    WrongTokenCount(usize),
    /// A token was not a plain non-negative integer.
    NotNumeric(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(n) => {
                write!(f, "Enter two coordinates, got {}", n)
            }
            InputError::NotNumeric(token) => write!(f, "'{}' is not a number", token),
        }
    }
}

impl core::error::Error for InputError {}

/// Parse `"x y"` (1-indexed) into a 0-indexed [`Coordinate`].
///
/// Range is not checked; a `0` or an oversized value produces a coordinate
/// the grid rejects as out of bounds.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(InputError::WrongTokenCount(line.split_whitespace().count()));
    };
    Ok(Coordinate::new(parse_axis(x)? - 1, parse_axis(y)? - 1))
}

fn parse_axis(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotNumeric(token.to_string()));
    }
    // all digits, so the only parse failure left is overflow
    Ok(token.parse::<i32>().unwrap_or(i32::MAX))
}
