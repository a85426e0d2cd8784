use crate::data::filter::FilteredSubset;

use super::{RankedBar, ViewError, ViewResult};

/// How many players the ranking shows at most.
const TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Top performers – top 10 by total points
// ---------------------------------------------------------------------------

/// Rank the subset by total points, descending, keeping at most [`TOP_N`]
/// bars. Ties keep dataset order (stable sort) so the output is
/// deterministic. An empty subset yields an empty ranking.
pub fn compute(subset: &FilteredSubset<'_>) -> Result<ViewResult, ViewError> {
    let mut ranked: Vec<_> = subset.iter().collect();
    // Stable: equal points keep their relative dataset order.
    ranked.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    ranked.truncate(TOP_N);

    let bars = ranked
        .into_iter()
        .map(|p| RankedBar {
            label: p.web_name.clone(),
            value: p.total_points as f64,
            color_value: Some(p.total_points as f64),
        })
        .collect();
    Ok(ViewResult::Ranking(bars))
}
