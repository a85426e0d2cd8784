//! End-to-end properties of the filtering-and-aggregation engine.
//!
//! Test categories:
//!   1. Filter correctness     -- engine output equals a naive row filter
//!   2. Ranking behavior       -- top-N size, order, tie stability
//!   3. Exclusion rules        -- zero denominators never divided
//!   4. Numeric exactness      -- points-per-90 within 1e-9
//!   5. Idempotence            -- same state, bit-identical bundles
//!   6. Snapshot consistency   -- all views drawn from one filtered subset
//!   7. Validation             -- inconsistent constraints rejected up front
//!   8. Failure isolation      -- one failing view never poisons the bundle

use fpl_scout::data::filter::{
    apply, validate_filter_state, FilterState, InvalidRangeError, PositionFilter,
};
use fpl_scout::data::model::{PlayerDataset, PlayerRecord, Position};
use fpl_scout::views::{
    self, recompute, ScatterPoint, ViewError, ViewResult, COST_EFFICIENCY,
    EXPECTED_VS_ACTUAL, POINTS_PER_90, TOP_PERFORMERS,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn player(
    name: &str,
    position: Position,
    cost: f64,
    minutes: u32,
    points: i64,
) -> PlayerRecord {
    PlayerRecord {
        first_name: name.to_string(),
        second_name: format!("{name}son"),
        web_name: name.to_string(),
        position,
        now_cost: cost,
        minutes,
        total_points: points,
        expected_goals: points as f64 * 0.1,
        goals_scored: (points / 20).max(0) as u32,
    }
}

/// A small squad spanning all positions, prices, and minute counts.
fn squad() -> PlayerDataset {
    PlayerDataset::from_players(vec![
        player("Pick", Position::Goalkeeper, 4.5, 3420, 121),
        player("Gab", Position::Defender, 5.0, 0, 0),
        player("Trent", Position::Defender, 8.0, 2800, 180),
        player("Salah", Position::Midfielder, 13.0, 2965, 211),
        player("Ode", Position::Midfielder, 8.5, 3100, 190),
        player("Haal", Position::Forward, 14.0, 2558, 272),
        player("Darwin", Position::Forward, 7.5, 1900, 120),
        player("Bench", Position::Forward, 4.5, 45, 2),
    ])
}

fn ranking_labels(view: &ViewResult) -> Vec<&str> {
    match view {
        ViewResult::Ranking(bars) => bars.iter().map(|b| b.label.as_str()).collect(),
        other => panic!("expected a ranking, got {other:?}"),
    }
}

fn scatter_points(view: &ViewResult) -> &[ScatterPoint] {
    match view {
        ViewResult::Scatter { points, .. } => points,
        other => panic!("expected a scatter, got {other:?}"),
    }
}

fn ok_view<'a>(
    bundle: &'a fpl_scout::views::ViewBundle,
    name: &str,
) -> &'a ViewResult {
    bundle
        .get(name)
        .unwrap_or_else(|| panic!("missing view {name}"))
        .as_ref()
        .unwrap_or_else(|e| panic!("view {name} failed: {e}"))
}

// ---------------------------------------------------------------------------
// 1. Filter correctness
// ---------------------------------------------------------------------------

#[test]
fn engine_agrees_with_naive_filter_across_states() {
    let ds = squad();
    let base = FilterState::defaults(&ds);
    let states = vec![
        base.clone(),
        base.with_position(PositionFilter::Only(Position::Forward)),
        base.with_cost_range(4.5, 8.0, &ds).unwrap(),
        base.with_min_minutes(1900, &ds).unwrap(),
        base.with_position(PositionFilter::Only(Position::Defender))
            .with_cost_range(5.0, 8.0, &ds)
            .unwrap()
            .with_min_minutes(100, &ds)
            .unwrap(),
    ];

    for state in states {
        let engine: Vec<&PlayerRecord> = apply(&ds, &state).iter().collect();
        let naive: Vec<&PlayerRecord> =
            ds.players().iter().filter(|p| state.matches(p)).collect();
        assert_eq!(engine, naive, "state {state:?}");
    }
}

// ---------------------------------------------------------------------------
// 2. Ranking behavior
// ---------------------------------------------------------------------------

#[test]
fn top_performers_returns_min_of_subset_size_and_ten() {
    let ds = squad();
    let bundle = recompute(&ds, &FilterState::defaults(&ds));
    let labels = ranking_labels(ok_view(&bundle, TOP_PERFORMERS));
    assert_eq!(labels.len(), 8); // fewer than 10 rows: all of them, ranked
    assert_eq!(labels[0], "Haal");
    assert_eq!(labels[1], "Salah");

    let big = PlayerDataset::from_players(
        (0..25)
            .map(|i| player(&format!("p{i}"), Position::Midfielder, 5.0, 900, i as i64))
            .collect(),
    );
    let bundle = recompute(&big, &FilterState::defaults(&big));
    assert_eq!(ranking_labels(ok_view(&bundle, TOP_PERFORMERS)).len(), 10);
}

#[test]
fn top_performers_ties_are_stable_in_dataset_order() {
    let ds = PlayerDataset::from_players(vec![
        player("early", Position::Forward, 6.0, 900, 77),
        player("later", Position::Forward, 6.0, 900, 77),
    ]);
    let bundle = recompute(&ds, &FilterState::defaults(&ds));
    assert_eq!(
        ranking_labels(ok_view(&bundle, TOP_PERFORMERS)),
        vec!["early", "later"]
    );
}

// ---------------------------------------------------------------------------
// 3. Exclusion rules & 4. Numeric exactness
// ---------------------------------------------------------------------------

#[test]
fn zero_minute_players_are_excluded_and_rates_are_exact() {
    let ds = squad();
    let bundle = recompute(&ds, &FilterState::defaults(&ds));
    let points = scatter_points(ok_view(&bundle, POINTS_PER_90));

    // "Gab" has zero minutes and must not appear.
    assert!(points.iter().all(|p| p.hover != "Gab"));
    assert_eq!(points.len(), 7);

    for p in points {
        let record = ds
            .players()
            .iter()
            .find(|r| r.web_name == p.hover)
            .unwrap();
        let expected = record.total_points as f64 / record.minutes as f64 * 90.0;
        assert!(
            (p.y - expected).abs() < 1e-9,
            "{}: {} vs {}",
            p.hover,
            p.y,
            expected
        );
    }
}

#[test]
fn cost_efficiency_orders_by_ratio_descending() {
    let ds = squad();
    let bundle = recompute(&ds, &FilterState::defaults(&ds));
    let points = scatter_points(ok_view(&bundle, views::COST_EFFICIENCY));
    assert_eq!(points.len(), ds.len());
    for pair in points.windows(2) {
        assert!(pair[0].color_value >= pair[1].color_value);
    }
}

// ---------------------------------------------------------------------------
// 5. Idempotence
// ---------------------------------------------------------------------------

#[test]
fn recompute_twice_yields_identical_bundles() {
    let ds = squad();
    let state = FilterState::defaults(&ds)
        .with_cost_range(4.5, 13.0, &ds)
        .unwrap()
        .with_min_minutes(40, &ds)
        .unwrap();
    assert_eq!(recompute(&ds, &state), recompute(&ds, &state));
}

// ---------------------------------------------------------------------------
// 6. Snapshot consistency
// ---------------------------------------------------------------------------

#[test]
fn all_views_draw_from_the_same_snapshot() {
    let ds = squad();
    let state = FilterState::defaults(&ds).with_min_minutes(1000, &ds).unwrap();
    let bundle = recompute(&ds, &state);

    // Expected-vs-actual is an identity view, so its hovers name the whole
    // snapshot. Every ranked performer must come from that same snapshot.
    let snapshot: Vec<&str> = scatter_points(ok_view(&bundle, EXPECTED_VS_ACTUAL))
        .iter()
        .map(|p| p.hover.as_str())
        .collect();
    assert_eq!(snapshot.len(), bundle.matched());

    for label in ranking_labels(ok_view(&bundle, TOP_PERFORMERS)) {
        assert!(snapshot.contains(&label), "{label} not in the snapshot");
    }
    for p in scatter_points(ok_view(&bundle, POINTS_PER_90)) {
        assert!(snapshot.contains(&p.hover.as_str()));
    }
}

// ---------------------------------------------------------------------------
// Scenarios from the design notes
// ---------------------------------------------------------------------------

#[test]
fn bench_player_with_zero_minutes_scenario() {
    let ds = PlayerDataset::from_players(vec![
        player("A", Position::Midfielder, 4.0, 0, 10),
        player("B", Position::Midfielder, 5.0, 90, 90),
    ]);
    let state = FilterState::defaults(&ds)
        .with_cost_range(4.0, 5.0, &ds)
        .unwrap();
    let bundle = recompute(&ds, &state);

    let rate_points = scatter_points(ok_view(&bundle, POINTS_PER_90));
    assert_eq!(rate_points.len(), 1);
    assert_eq!(rate_points[0].hover, "B");
    assert!((rate_points[0].y - 90.0).abs() < 1e-9);

    assert_eq!(
        ranking_labels(ok_view(&bundle, TOP_PERFORMERS)),
        vec!["B", "A"]
    );
}

#[test]
fn window_matching_nothing_empties_every_view_without_error() {
    let ds = PlayerDataset::from_players(vec![
        player("low", Position::Defender, 4.0, 900, 50),
        player("high", Position::Forward, 6.0, 900, 80),
    ]);
    // Valid window between the two observed costs: nothing matches.
    let state = FilterState::defaults(&ds)
        .with_cost_range(5.0, 5.0, &ds)
        .unwrap();
    let bundle = recompute(&ds, &state);
    assert_eq!(bundle.matched(), 0);
    for name in views::VIEW_NAMES {
        let view = ok_view(&bundle, name);
        assert!(view.is_empty(), "{name} should be empty");
    }
}

// ---------------------------------------------------------------------------
// 7. Validation
// ---------------------------------------------------------------------------

#[test]
fn inverted_range_is_rejected_before_it_can_apply() {
    let ds = squad();
    let prior = FilterState::defaults(&ds);
    let candidate = FilterState {
        cost_range: (6.0, 5.0),
        ..prior.clone()
    };
    let err = validate_filter_state(&candidate, &ds).unwrap_err();
    assert_eq!(err, InvalidRangeError::InvertedCostRange { lo: 6.0, hi: 5.0 });

    // The prior state is untouched and still usable.
    assert_eq!(prior.cost_range, ds.cost_bounds());
    assert_eq!(apply(&ds, &prior).len(), ds.len());
}

// ---------------------------------------------------------------------------
// 8. Failure isolation
// ---------------------------------------------------------------------------

#[test]
fn failing_view_is_isolated_to_its_own_slot() {
    // A subnormal cost passes the zero-denominator guard but overflows
    // total_points / now_cost to infinity, so only cost-efficiency fails.
    let ds = PlayerDataset::from_players(vec![
        player("Tiny", Position::Forward, 5e-324, 900, 10),
        player("Norm", Position::Forward, 7.5, 1800, 120),
    ]);
    let bundle = recompute(&ds, &FilterState::defaults(&ds));

    match bundle.get(COST_EFFICIENCY).unwrap() {
        Err(ViewError::NonFiniteMetric { player }) => assert_eq!(player.as_str(), "Tiny"),
        other => panic!("expected a non-finite metric error, got {other:?}"),
    }

    // The other three slots still compute over the full snapshot.
    for name in [TOP_PERFORMERS, EXPECTED_VS_ACTUAL, POINTS_PER_90] {
        assert!(
            bundle.get(name).unwrap().is_ok(),
            "{name} should be unaffected"
        );
    }
    assert_eq!(scatter_points(ok_view(&bundle, EXPECTED_VS_ACTUAL)).len(), 2);
    assert_eq!(
        ranking_labels(ok_view(&bundle, TOP_PERFORMERS)),
        vec!["Norm", "Tiny"]
    );
}
