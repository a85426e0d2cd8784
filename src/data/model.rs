use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Player costs move on a fixed 0.5 grid in the source data.
pub const COST_STEP: f64 = 0.5;

// ---------------------------------------------------------------------------
// Position – the categorical axis of the dataset
// ---------------------------------------------------------------------------

/// The four playing positions used by the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions, in the dataset's conventional order.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a category string that is none of the four known positions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position label: '{0}'")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Goalkeeper" => Ok(Position::Goalkeeper),
            "Defender" => Ok(Position::Defender),
            "Midfielder" => Ok(Position::Midfielder),
            "Forward" => Ok(Position::Forward),
            other => Err(ParsePositionError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single player (one row of the source table). Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub first_name: String,
    pub second_name: String,
    /// Short display name used as chart label and hover text.
    pub web_name: String,
    pub position: Position,
    /// Current price in the game's 0.5-granularity units.
    pub now_cost: f64,
    /// Minutes played over the season.
    pub minutes: u32,
    pub total_points: i64,
    pub expected_goals: f64,
    pub goals_scored: u32,
}

/// Row shape shared by the CSV and JSON loaders; turned into a
/// [`PlayerRecord`] once the position label has been parsed.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPlayer {
    pub first_name: String,
    pub second_name: String,
    pub web_name: String,
    /// Position label column, named after the source API field.
    pub singular_name: String,
    pub now_cost: f64,
    pub minutes: u32,
    pub total_points: i64,
    pub expected_goals: f64,
    pub goals_scored: u32,
}

// ---------------------------------------------------------------------------
// PlayerDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed global bounds.
///
/// Fields are private: the dataset is read-only after load and shared by
/// reference with every downstream computation.
#[derive(Debug, Clone)]
pub struct PlayerDataset {
    players: Vec<PlayerRecord>,
    /// Observed cost min/max, snapped outward to the 0.5 grid.
    cost_bounds: (f64, f64),
    /// Largest observed minutes value.
    max_minutes: u32,
}

/// Snap down to the nearest multiple of [`COST_STEP`].
fn snap_down(v: f64) -> f64 {
    (v / COST_STEP).floor() * COST_STEP
}

/// Snap up to the nearest multiple of [`COST_STEP`].
fn snap_up(v: f64) -> f64 {
    (v / COST_STEP).ceil() * COST_STEP
}

/// Whether a value sits on the 0.5 grid (within float tolerance).
pub fn on_cost_grid(v: f64) -> bool {
    let steps = v / COST_STEP;
    (steps - steps.round()).abs() < 1e-9
}

impl PlayerDataset {
    /// Build the dataset and its global bounds from loaded rows.
    pub fn from_players(players: Vec<PlayerRecord>) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut max_minutes = 0u32;
        for p in &players {
            lo = lo.min(p.now_cost);
            hi = hi.max(p.now_cost);
            max_minutes = max_minutes.max(p.minutes);
        }
        let cost_bounds = if players.is_empty() {
            (0.0, 0.0)
        } else {
            (snap_down(lo), snap_up(hi))
        };
        PlayerDataset {
            players,
            cost_bounds,
            max_minutes,
        }
    }

    /// All rows, in load order.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Global (min, max) cost, snapped outward to the 0.5 grid.
    pub fn cost_bounds(&self) -> (f64, f64) {
        self.cost_bounds
    }

    /// Largest minutes value in the dataset.
    pub fn max_minutes(&self) -> u32 {
        self.max_minutes
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
