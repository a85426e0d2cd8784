use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot, Points};

use crate::color::ColorScale;
use crate::state::{AppState, ViewTab};
use crate::views::{color_domain, RankedBar, ScatterPoint, ViewResult};

// ---------------------------------------------------------------------------
// Central panel – the active view
// ---------------------------------------------------------------------------

/// Render the active view tab from the current bundle.
pub fn view_plot(ui: &mut Ui, state: &AppState) {
    let Some(bundle) = state.bundle() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a player file to explore the views  (File → Open…)");
        });
        return;
    };

    let tab = state.active_tab;
    match bundle.get(tab.key()) {
        Some(Ok(view)) => render_view(ui, tab, view),
        Some(Err(e)) => {
            // Isolated failure: the other tabs keep rendering normally.
            ui.colored_label(
                eframe::egui::Color32::RED,
                format!("{} could not be computed: {e}", tab.title()),
            );
        }
        None => {}
    }
}

fn render_view(ui: &mut Ui, tab: ViewTab, view: &ViewResult) {
    match view {
        ViewResult::Ranking(bars) => ranking_plot(ui, tab, bars),
        ViewResult::Scatter {
            points,
            color_domain,
        } => scatter_plot(ui, tab, points, *color_domain),
    }
}

/// Axis labels per tab, mirroring the chart titles.
fn axis_labels(tab: ViewTab) -> (&'static str, &'static str) {
    match tab {
        ViewTab::TopPerformers => ("Player", "Total Points"),
        ViewTab::CostEfficiency => ("Now Cost", "Total Points"),
        ViewTab::ExpectedVsActual => ("Expected Goals", "Goals Scored"),
        ViewTab::PointsPer90 => ("Minutes Played", "Points per 90 Minutes"),
    }
}

/// What the color channel encodes, per tab.
fn color_title(tab: ViewTab) -> &'static str {
    match tab {
        ViewTab::TopPerformers => "Total Points",
        ViewTab::CostEfficiency => "Value for Money",
        ViewTab::ExpectedVsActual => "Goals Scored",
        ViewTab::PointsPer90 => "Points per 90 Minutes",
    }
}

/// Legend row above the chart: domain endpoints in their own colors.
fn color_legend(ui: &mut Ui, tab: ViewTab, scale: &ColorScale) {
    let (lo, hi) = scale.domain();
    let (lo_label, hi_label) = scale.legend_labels();
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{}:", color_title(tab)));
        ui.colored_label(scale.color_for(lo), lo_label);
        ui.label("to");
        ui.colored_label(scale.color_for(hi), hi_label);
    });
}

// ---------------------------------------------------------------------------
// Ranked bar chart
// ---------------------------------------------------------------------------

fn ranking_plot(ui: &mut Ui, tab: ViewTab, bars: &[RankedBar]) {
    let scale = color_domain(bars.iter().filter_map(|b| b.color_value))
        .map(ColorScale::new);
    if let Some(scale) = &scale {
        color_legend(ui, tab, scale);
    }

    let chart_bars: Vec<Bar> = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let mut bar = Bar::new(i as f64, b.value).name(&b.label).width(0.6);
            if let (Some(scale), Some(cv)) = (&scale, b.color_value) {
                bar = bar.fill(scale.color_for(cv));
            }
            bar
        })
        .collect();

    let (x_label, y_label) = axis_labels(tab);
    Plot::new(tab.key())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(chart_bars));
        });
}

// ---------------------------------------------------------------------------
// Colored scatter
// ---------------------------------------------------------------------------

fn scatter_plot(
    ui: &mut Ui,
    tab: ViewTab,
    points: &[ScatterPoint],
    domain: Option<(f64, f64)>,
) {
    let scale = domain.map(ColorScale::new);
    if let Some(scale) = &scale {
        color_legend(ui, tab, scale);
    }

    let (x_label, y_label) = axis_labels(tab);
    Plot::new(tab.key())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One element per marker so each carries its own color and
            // hover name.
            for p in points {
                let mut marker = Points::new(vec![[p.x, p.y]])
                    .name(&p.hover)
                    .radius(4.0);
                if let Some(scale) = &scale {
                    marker = marker.color(scale.color_for(p.color_value));
                }
                plot_ui.points(marker);
            }
        });
}
