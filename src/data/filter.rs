use super::model::{on_cost_grid, PlayerDataset, PlayerRecord, Position};

// ---------------------------------------------------------------------------
// FilterState – the current constraint set
// ---------------------------------------------------------------------------

/// Category constraint: either everything or a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFilter {
    All,
    Only(Position),
}

impl PositionFilter {
    pub fn label(&self) -> &'static str {
        match self {
            PositionFilter::All => "All",
            PositionFilter::Only(p) => p.as_str(),
        }
    }
}

/// Rejection reasons for a candidate constraint set.
///
/// Out-of-range input is rejected, never clamped: a silently adjusted
/// constraint would make the views disagree with what the user asked for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRangeError {
    #[error("cost range is inverted: lower bound {lo} exceeds upper bound {hi}")]
    InvertedCostRange { lo: f64, hi: f64 },
    #[error("cost bound {value} is outside the dataset range [{min}, {max}]")]
    CostOutOfBounds { value: f64, min: f64, max: f64 },
    #[error("cost bound {0} is not on the 0.5 grid")]
    CostOffGrid(f64),
    #[error("minimum minutes {value} exceeds the dataset maximum {max}")]
    MinutesOutOfBounds { value: u32, max: u32 },
}

/// Immutable constraint set shared by all views.
///
/// Constructed valid and only replaced wholesale: builder methods return a
/// new validated state and leave the original untouched on rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub position: PositionFilter,
    /// Inclusive (lo, hi) cost window on the 0.5 grid.
    pub cost_range: (f64, f64),
    pub min_minutes: u32,
}

impl FilterState {
    /// The startup state: every position, full cost range, no minutes floor.
    pub fn defaults(dataset: &PlayerDataset) -> Self {
        FilterState {
            position: PositionFilter::All,
            cost_range: dataset.cost_bounds(),
            min_minutes: 0,
        }
    }

    /// Replace the category constraint. Always valid.
    pub fn with_position(&self, position: PositionFilter) -> Self {
        FilterState { position, ..self.clone() }
    }

    /// Replace the cost window, validated against the dataset bounds.
    pub fn with_cost_range(
        &self,
        lo: f64,
        hi: f64,
        dataset: &PlayerDataset,
    ) -> Result<Self, InvalidRangeError> {
        let candidate = FilterState {
            cost_range: (lo, hi),
            ..self.clone()
        };
        validate_filter_state(&candidate, dataset)
    }

    /// Replace the minutes floor, validated against the dataset maximum.
    pub fn with_min_minutes(
        &self,
        min_minutes: u32,
        dataset: &PlayerDataset,
    ) -> Result<Self, InvalidRangeError> {
        let candidate = FilterState {
            min_minutes,
            ..self.clone()
        };
        validate_filter_state(&candidate, dataset)
    }

    /// Whether a single record satisfies all three constraints.
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        let position_ok = match self.position {
            PositionFilter::All => true,
            PositionFilter::Only(p) => record.position == p,
        };
        let (lo, hi) = self.cost_range;
        position_ok
            && record.now_cost >= lo
            && record.now_cost <= hi
            && record.minutes >= self.min_minutes
    }
}

/// Check a candidate constraint set against the dataset's global bounds.
///
/// Returns the candidate unchanged when it is consistent; the caller keeps
/// its prior state on rejection.
pub fn validate_filter_state(
    candidate: &FilterState,
    dataset: &PlayerDataset,
) -> Result<FilterState, InvalidRangeError> {
    let (lo, hi) = candidate.cost_range;
    if lo > hi {
        return Err(InvalidRangeError::InvertedCostRange { lo, hi });
    }
    let (min, max) = dataset.cost_bounds();
    for value in [lo, hi] {
        if value < min || value > max {
            return Err(InvalidRangeError::CostOutOfBounds { value, min, max });
        }
        if !on_cost_grid(value) {
            return Err(InvalidRangeError::CostOffGrid(value));
        }
    }
    if candidate.min_minutes > dataset.max_minutes() {
        return Err(InvalidRangeError::MinutesOutOfBounds {
            value: candidate.min_minutes,
            max: dataset.max_minutes(),
        });
    }
    Ok(candidate.clone())
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// The rows passing the current [`FilterState`], in dataset order.
///
/// Ephemeral by construction: it borrows the dataset for one recompute cycle
/// and is dropped with it, so no view can ever see indices from a previous
/// constraint set.
#[derive(Debug, Clone)]
pub struct FilteredSubset<'a> {
    dataset: &'a PlayerDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredSubset<'a> {
    /// Iterate the matching records in stable dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &'a PlayerRecord> + '_ {
        let players = self.dataset.players();
        self.indices.iter().map(move |&i| &players[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Apply the constraint set in one O(n) pass over the dataset.
///
/// Pure: no scratch state survives the call, so concurrent cycles over the
/// same dataset cannot contaminate each other. An empty result is a normal
/// value, not an error.
pub fn apply<'a>(dataset: &'a PlayerDataset, state: &FilterState) -> FilteredSubset<'a> {
    let indices = dataset
        .players()
        .iter()
        .enumerate()
        .filter(|(_, p)| state.matches(p))
        .map(|(i, _)| i)
        .collect();
    FilteredSubset { dataset, indices }
}
