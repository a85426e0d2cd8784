use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::PositionFilter;
use crate::data::model::{Position, COST_STEP};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let (cost_bounds, max_minutes) = match &state.dataset {
        Some(ds) => (ds.cost_bounds(), ds.max_minutes()),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };
    let Some(filter) = state.filter.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    // ---- Position ----
    ui.strong("Position");
    egui::ComboBox::from_id_salt("position_filter")
        .selected_text(filter.position.label())
        .show_ui(ui, |ui: &mut Ui| {
            let options = std::iter::once(PositionFilter::All)
                .chain(Position::ALL.into_iter().map(PositionFilter::Only));
            for option in options {
                if ui
                    .selectable_label(filter.position == option, option.label())
                    .clicked()
                {
                    state.set_position(option);
                }
            }
        });
    ui.separator();

    // ---- Cost range (inclusive, on the 0.5 grid) ----
    ui.strong("Cost range");
    let (mut lo, mut hi) = filter.cost_range;
    let (min_cost, max_cost) = cost_bounds;
    let lo_changed = ui
        .add(
            Slider::new(&mut lo, min_cost..=max_cost)
                .step_by(COST_STEP)
                .fixed_decimals(1)
                .text("from"),
        )
        .changed();
    let hi_changed = ui
        .add(
            Slider::new(&mut hi, min_cost..=max_cost)
                .step_by(COST_STEP)
                .fixed_decimals(1)
                .text("to"),
        )
        .changed();
    if lo_changed || hi_changed {
        // Validation decides: an inverted pair is rejected and the prior
        // window stays in effect.
        state.set_cost_range(lo, hi);
    }
    ui.separator();

    // ---- Minimum minutes ----
    ui.strong("Minimum minutes played");
    let mut min_minutes = filter.min_minutes;
    if ui
        .add(
            Slider::new(&mut min_minutes, 0..=max_minutes)
                .step_by(10.0)
                .text("minutes"),
        )
        .changed()
    {
        state.set_min_minutes(min_minutes);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let matched = state.bundle().map(|b| b.matched()).unwrap_or(0);
            ui.label(format!(
                "{} players loaded, {} match the filters",
                ds.len(),
                matched
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open player data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} players, cost bounds {:?}",
                    dataset.len(),
                    dataset.cost_bounds()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
