mod app;
mod data;
mod session;
mod state;
mod ui;

use app::RustyGridApp;
use data::filter::FilterCriteria;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Base URL of the server the dataset came from; enables the logout
    // control when set.
    let server_url = std::env::var("RUSTY_GRID_SERVER").ok();

    // Optional initial filter criteria, as a JSON object of
    // column → substring pattern, applied when a dataset is opened.
    let initial_criteria: FilterCriteria = std::env::var("RUSTY_GRID_FILTERS")
        .ok()
        .and_then(|text| match serde_json::from_str(&text) {
            Ok(criteria) => Some(criteria),
            Err(e) => {
                log::warn!("Ignoring RUSTY_GRID_FILTERS: {e}");
                None
            }
        })
        .unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Grid – Data Table Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyGridApp::new(server_url, initial_criteria)))),
    )
}
