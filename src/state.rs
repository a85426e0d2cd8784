use crate::data::filter::{validate_filter_state, FilterState, PositionFilter};
use crate::data::model::PlayerDataset;
use crate::views::{self, ViewBundle};

// ---------------------------------------------------------------------------
// View tabs
// ---------------------------------------------------------------------------

/// Which view the central panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    TopPerformers,
    CostEfficiency,
    ExpectedVsActual,
    PointsPer90,
}

impl ViewTab {
    pub const ALL: [ViewTab; 4] = [
        ViewTab::TopPerformers,
        ViewTab::CostEfficiency,
        ViewTab::ExpectedVsActual,
        ViewTab::PointsPer90,
    ];

    /// Bundle key of the view behind this tab.
    pub fn key(&self) -> &'static str {
        match self {
            ViewTab::TopPerformers => views::TOP_PERFORMERS,
            ViewTab::CostEfficiency => views::COST_EFFICIENCY,
            ViewTab::ExpectedVsActual => views::EXPECTED_VS_ACTUAL,
            ViewTab::PointsPer90 => views::POINTS_PER_90,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewTab::TopPerformers => "Top Performers",
            ViewTab::CostEfficiency => "Cost-Effective Players",
            ViewTab::ExpectedVsActual => "Expected Goals vs Goals Scored",
            ViewTab::PointsPer90 => "Points per 90 Minutes",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Constraint changes go through validation: a rejected candidate leaves the
/// prior state (and its bundle) in effect. Every accepted change bumps a
/// version; a computed bundle is applied only while its version still matches
/// the latest state, so a superseded cycle's result is discarded rather than
/// shown out of order.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<PlayerDataset>,

    /// Current validated constraint set (None without a dataset).
    pub filter: Option<FilterState>,

    /// Bumped on every accepted constraint change.
    filter_version: u64,

    /// Last applied recompute cycle, tagged with the version it was run for.
    bundle: Option<(u64, ViewBundle)>,

    /// Which view tab is active.
    pub active_tab: ViewTab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filter: None,
            filter_version: 0,
            bundle: None,
            active_tab: ViewTab::TopPerformers,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset constraints to defaults.
    pub fn set_dataset(&mut self, dataset: PlayerDataset) {
        self.filter = Some(FilterState::defaults(&dataset));
        self.dataset = Some(dataset);
        self.filter_version += 1;
        self.status_message = None;
        self.loading = false;
        self.recompute_views();
    }

    /// The bundle for the current constraint set, if one has been computed.
    pub fn bundle(&self) -> Option<&ViewBundle> {
        match &self.bundle {
            Some((version, bundle)) if *version == self.filter_version => Some(bundle),
            _ => None,
        }
    }

    pub fn filter_version(&self) -> u64 {
        self.filter_version
    }

    /// Replace the category constraint. Category changes are always valid.
    pub fn set_position(&mut self, position: PositionFilter) {
        if let Some(filter) = &self.filter {
            let candidate = filter.with_position(position);
            self.accept(candidate);
        }
    }

    /// Try to replace the cost window; keep the prior state on rejection.
    pub fn set_cost_range(&mut self, lo: f64, hi: f64) {
        let (Some(dataset), Some(filter)) = (self.dataset.as_ref(), self.filter.as_ref())
        else {
            return;
        };
        let candidate = FilterState {
            cost_range: (lo, hi),
            ..filter.clone()
        };
        match validate_filter_state(&candidate, dataset) {
            Ok(valid) => self.accept(valid),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Try to replace the minutes floor; keep the prior state on rejection.
    pub fn set_min_minutes(&mut self, min_minutes: u32) {
        let (Some(dataset), Some(filter)) = (self.dataset.as_ref(), self.filter.as_ref())
        else {
            return;
        };
        let candidate = FilterState {
            min_minutes,
            ..filter.clone()
        };
        match validate_filter_state(&candidate, dataset) {
            Ok(valid) => self.accept(valid),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Install an already-validated state and start a new cycle.
    fn accept(&mut self, state: FilterState) {
        self.filter = Some(state);
        self.filter_version += 1;
        self.status_message = None;
        self.recompute_views();
    }

    /// Run one recompute cycle for the current state.
    fn recompute_views(&mut self) {
        let (Some(dataset), Some(filter)) = (self.dataset.as_ref(), self.filter.as_ref())
        else {
            return;
        };
        let version = self.filter_version;
        let bundle = views::recompute(dataset, filter);
        // Last-write-wins: apply only if no newer constraint set arrived
        // while this cycle ran.
        if version == self.filter_version {
            self.bundle = Some((version, bundle));
        }
    }
}
