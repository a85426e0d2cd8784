use crate::data::filter::FilteredSubset;

use super::{color_domain, ScatterPoint, ViewError, ViewResult};

// ---------------------------------------------------------------------------
// Points per 90 minutes
// ---------------------------------------------------------------------------

/// One marker per record at (minutes, points_per_90), colored by the same
/// rate, where points_per_90 = total_points / minutes * 90.
///
/// Exclusion rule, not an error path: a record with `minutes == 0` is
/// silently dropped so the division is never attempted.
pub fn compute(subset: &FilteredSubset<'_>) -> Result<ViewResult, ViewError> {
    let mut points = Vec::new();
    for p in subset.iter() {
        if p.minutes == 0 {
            continue;
        }
        let per_90 = p.total_points as f64 / p.minutes as f64 * 90.0;
        if !per_90.is_finite() {
            return Err(ViewError::NonFiniteMetric {
                player: p.web_name.clone(),
            });
        }
        points.push(ScatterPoint {
            x: p.minutes as f64,
            y: per_90,
            color_value: per_90,
            hover: p.web_name.clone(),
        });
    }

    let domain = color_domain(points.iter().map(|p| p.color_value));
    Ok(ViewResult::Scatter {
        points,
        color_domain: domain,
    })
}
