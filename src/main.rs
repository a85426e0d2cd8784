use eframe::egui;

use fpl_scout::app::FplScoutApp;
use fpl_scout::data::loader;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FPL Scout – Player Explorer",
        options,
        Box::new(|_cc| {
            let mut app = FplScoutApp::default();

            // Optional dataset path on the command line skips the dialog.
            if let Some(path) = std::env::args().nth(1) {
                match loader::load_file(std::path::Path::new(&path)) {
                    Ok(dataset) => {
                        log::info!("Loaded {} players from {path}", dataset.len());
                        app.state.set_dataset(dataset);
                    }
                    Err(e) => {
                        log::error!("Failed to load {path}: {e}");
                        app.state.status_message = Some(format!("Error: {e}"));
                    }
                }
            }

            Ok(Box::new(app))
        }),
    )
}
