use crate::data::filter::FilteredSubset;

use super::{color_domain, ScatterPoint, ViewError, ViewResult};

// ---------------------------------------------------------------------------
// Cost efficiency – total points vs. cost, colored by value for money
// ---------------------------------------------------------------------------

/// One marker per record: x = cost, y = total points, colored by
/// value_for_money = total_points / now_cost, ordered best value first.
///
/// Exclusion rule, not an error path: a record with `now_cost == 0` is
/// silently dropped so the division is never attempted. Such a record cannot
/// pass the cost-range constraint in practice, but the view defends the
/// denominator itself.
///
/// `min_cost` does NOT re-filter rows. It only anchors the color scale: the
/// (min, max) color domain is taken over records costing at least `min_cost`,
/// matching the control surface's lower cost bound.
pub fn compute(subset: &FilteredSubset<'_>, min_cost: f64) -> Result<ViewResult, ViewError> {
    let mut scored: Vec<(&crate::data::model::PlayerRecord, f64)> = Vec::new();
    for p in subset.iter() {
        if p.now_cost == 0.0 {
            continue;
        }
        let value_for_money = p.total_points as f64 / p.now_cost;
        if !value_for_money.is_finite() {
            return Err(ViewError::NonFiniteMetric {
                player: p.web_name.clone(),
            });
        }
        scored.push((p, value_for_money));
    }

    // Stable: tied ratios keep dataset order.
    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    let domain = color_domain(
        scored
            .iter()
            .filter(|(p, _)| p.now_cost >= min_cost)
            .map(|(_, v)| *v),
    );

    let points = scored
        .into_iter()
        .map(|(p, value_for_money)| ScatterPoint {
            x: p.now_cost,
            y: p.total_points as f64,
            color_value: value_for_money,
            hover: p.web_name.clone(),
        })
        .collect();

    Ok(ViewResult::Scatter {
        points,
        color_domain: domain,
    })
}
