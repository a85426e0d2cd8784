use crate::data::filter::FilteredSubset;

use super::{color_domain, ScatterPoint, ViewError, ViewResult};

// ---------------------------------------------------------------------------
// Expected goals vs. goals scored
// ---------------------------------------------------------------------------

/// Identity mapping over the subset: one marker per record at
/// (expected_goals, goals_scored), colored by goals scored. No further
/// filtering or aggregation.
pub fn compute(subset: &FilteredSubset<'_>) -> Result<ViewResult, ViewError> {
    let points: Vec<ScatterPoint> = subset
        .iter()
        .map(|p| ScatterPoint {
            x: p.expected_goals,
            y: p.goals_scored as f64,
            color_value: p.goals_scored as f64,
            hover: p.web_name.clone(),
        })
        .collect();

    let domain = color_domain(points.iter().map(|p| p.color_value));
    Ok(ViewResult::Scatter {
        points,
        color_domain: domain,
    })
}
