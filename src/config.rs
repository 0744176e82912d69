use core::fmt;

pub const DEFAULT_GRID_SIZE: usize = 6;
/// Smallest grid the default fleet is known to fit on.
pub const MIN_GRID_SIZE: usize = 6;
pub const MAX_GRID_SIZE: usize = 16;

pub const NUM_VESSELS: usize = 7;
/// Vessel lengths, placed in this order.
pub const FLEET: [usize; NUM_VESSELS] = [3, 2, 2, 1, 1, 1, 1];

/// Random draws allowed per vessel before the whole grid is thrown away.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Total number of vessel cells in the default fleet.
pub const TOTAL_VESSEL_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i];
        i += 1;
    }
    total
}

/// Errors returned when building a [`MatchConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    GridTooSmall { size: usize, min: usize },
    GridTooLarge { size: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooSmall { size, min } => {
                write!(f, "Grid size {} is too small (minimum {})", size, min)
            }
            ConfigError::GridTooLarge { size, max } => {
                write!(f, "Grid size {} is too large (maximum {})", size, max)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Settings for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    size: usize,
    placement_attempts: usize,
    reveal_opponent: bool,
}

impl MatchConfig {
    /// Config for an `size`×`size` grid with the default fleet.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size,
                min: MIN_GRID_SIZE,
            });
        }
        if size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(Self {
            size,
            placement_attempts: PLACEMENT_ATTEMPTS,
            reveal_opponent: false,
        })
    }

    /// Show the opponent's vessels when rendering its grid.
    pub fn with_revealed_opponent(mut self, reveal: bool) -> Self {
        self.reveal_opponent = reveal;
        self
    }

    /// Override the per-vessel placement budget. Zero is treated as one.
    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts.max(1);
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn placement_attempts(&self) -> usize {
        self.placement_attempts
    }

    pub fn reveal_opponent(&self) -> bool {
        self.reveal_opponent
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            placement_attempts: PLACEMENT_ATTEMPTS,
            reveal_opponent: false,
        }
    }
}
