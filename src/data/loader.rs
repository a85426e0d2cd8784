use std::path::Path;

use super::model::{PlayerDataset, PlayerRecord, RawPlayer};

/// Columns every source file must carry.
const REQUIRED_COLUMNS: [&str; 9] = [
    "first_name",
    "second_name",
    "web_name",
    "singular_name",
    "now_cost",
    "minutes",
    "total_points",
    "expected_goals",
    "goals_scored",
];

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Fatal ingestion failures. No partial dataset is ever produced: the first
/// bad row aborts the whole load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("source is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
    #[error("source contains no player rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a player dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the required columns (see source export)
/// * `.json` – records-oriented array of objects with the same fields
pub fn load_file(path: &Path) -> Result<PlayerDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

/// Parse the position label and finish converting a raw row.
fn finish_row(raw: RawPlayer, row: usize) -> Result<PlayerRecord, LoadError> {
    let position = raw
        .singular_name
        .parse()
        .map_err(|e| LoadError::Row {
            row,
            message: format!("{e}"),
        })?;
    Ok(PlayerRecord {
        first_name: raw.first_name,
        second_name: raw.second_name,
        web_name: raw.web_name,
        position,
        now_cost: raw.now_cost,
        minutes: raw.minutes,
        total_points: raw.total_points,
        expected_goals: raw.expected_goals,
        goals_scored: raw.goals_scored,
    })
}

fn build_dataset(players: Vec<PlayerRecord>) -> Result<PlayerDataset, LoadError> {
    if players.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(PlayerDataset::from_players(players))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<PlayerDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;

    // Check the header up front so a missing column is reported by name
    // instead of as a per-row deserialization failure.
    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut players = Vec::new();
    for (row, result) in reader.deserialize::<RawPlayer>().enumerate() {
        let raw = result?;
        players.push(finish_row(raw, row)?);
    }
    build_dataset(players)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "first_name": "Erling", "second_name": "Haaland",
///     "web_name": "Haaland", "singular_name": "Forward",
///     "now_cost": 14.0, "minutes": 2558,
///     "total_points": 272, "expected_goals": 29.5, "goals_scored": 36
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<PlayerDataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let raws: Vec<RawPlayer> = serde_json::from_str(&text)?;

    let mut players = Vec::with_capacity(raws.len());
    for (row, raw) in raws.into_iter().enumerate() {
        players.push(finish_row(raw, row)?);
    }
    build_dataset(players)
}
