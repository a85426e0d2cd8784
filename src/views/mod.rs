/// View layer: four independent plot-ready summaries over one filtered
/// snapshot per recompute cycle.
///
/// The orchestrator runs the filter engine exactly once and hands the same
/// [`FilteredSubset`] to every computer, so no two views in a bundle can
/// reflect different constraint values.
pub mod cost_efficiency;
pub mod expected_vs_actual;
pub mod points_per_90;
pub mod top_performers;

use std::collections::BTreeMap;

use crate::data::filter::{apply, FilterState};
use crate::data::model::PlayerDataset;

// ---------------------------------------------------------------------------
// Bundle keys
// ---------------------------------------------------------------------------

pub const TOP_PERFORMERS: &str = "top_performers";
pub const COST_EFFICIENCY: &str = "cost_efficiency";
pub const EXPECTED_VS_ACTUAL: &str = "expected_vs_actual";
pub const POINTS_PER_90: &str = "points_per_90";

/// All view names, in presentation order.
pub const VIEW_NAMES: [&str; 4] = [
    TOP_PERFORMERS,
    COST_EFFICIENCY,
    EXPECTED_VS_ACTUAL,
    POINTS_PER_90,
];

// ---------------------------------------------------------------------------
// Plot-ready value types
// ---------------------------------------------------------------------------

/// One bar of a ranked bar view.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBar {
    pub label: String,
    pub value: f64,
    /// Value driving the bar's color-scale position, when the view colors.
    pub color_value: Option<f64>,
}

/// One marker of a scatter view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Value driving the marker's color-scale position.
    pub color_value: f64,
    /// Hover label (the player's display name).
    pub hover: String,
}

/// Plot-ready output of a single view. Recomputed per cycle, never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewResult {
    /// Ordered bars, highest-ranked first.
    Ranking(Vec<RankedBar>),
    /// Scatter markers plus the (min, max) domain for the color scale;
    /// `None` when the view produced nothing to color.
    Scatter {
        points: Vec<ScatterPoint>,
        color_domain: Option<(f64, f64)>,
    },
}

impl ViewResult {
    pub fn is_empty(&self) -> bool {
        match self {
            ViewResult::Ranking(bars) => bars.is_empty(),
            ViewResult::Scatter { points, .. } => points.is_empty(),
        }
    }
}

/// Failure inside a single view computer. Isolated per bundle slot: the
/// other views still compute, and the failing slot never carries a stale
/// previous result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("derived metric for '{player}' is not finite")]
    NonFiniteMetric { player: String },
}

/// (min, max) over a sequence of color values, ignoring nothing: callers
/// pass only values that are finite by construction.
pub(crate) fn color_domain(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut domain: Option<(f64, f64)> = None;
    for v in values {
        domain = Some(match domain {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    domain
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// One recompute cycle's output: every view, keyed by name, each slot either
/// a result or that view's own error.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBundle {
    /// How many records the shared snapshot held.
    matched: usize,
    views: BTreeMap<&'static str, Result<ViewResult, ViewError>>,
}

impl ViewBundle {
    pub fn get(&self, name: &str) -> Option<&Result<ViewResult, ViewError>> {
        self.views.get(name)
    }

    /// Size of the filtered snapshot every view in this bundle was
    /// computed from.
    pub fn matched(&self) -> usize {
        self.matched
    }
}

/// Run one recompute cycle: filter once, fan the identical subset out to all
/// four view computers. Pure and deterministic; calling twice with the same
/// state yields identical bundles.
pub fn recompute(dataset: &PlayerDataset, state: &FilterState) -> ViewBundle {
    let subset = apply(dataset, state);

    let mut views = BTreeMap::new();
    views.insert(TOP_PERFORMERS, top_performers::compute(&subset));
    views.insert(
        COST_EFFICIENCY,
        cost_efficiency::compute(&subset, state.cost_range.0),
    );
    views.insert(EXPECTED_VS_ACTUAL, expected_vs_actual::compute(&subset));
    views.insert(POINTS_PER_90, points_per_90::compute(&subset));

    ViewBundle {
        matched: subset.len(),
        views,
    }
}
