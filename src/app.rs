use eframe::egui;

use crate::data::filter::FilterCriteria;
use crate::session::Session;
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyGridApp {
    pub state: AppState,
    /// Server session for the logout endpoint; None when no server is
    /// configured, which hides the logout control.
    pub session: Option<Session>,
    /// Filter criteria pre-applied whenever a dataset is opened.
    pub initial_criteria: FilterCriteria,
}

impl RustyGridApp {
    pub fn new(server_url: Option<String>, initial_criteria: FilterCriteria) -> Self {
        let session = server_url.and_then(|url| match Session::new(&url) {
            Ok(session) => Some(session),
            Err(e) => {
                log::error!("Failed to set up session for {url}: {e:#}");
                None
            }
        });

        Self {
            state: AppState::default(),
            session,
            initial_criteria,
        }
    }
}

impl eframe::App for RustyGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(
                ui,
                &mut self.state,
                self.session.as_ref(),
                &self.initial_criteria,
            );
        });

        // ---- Left side panel: filters and columns ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: data table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::data_table(ui, &mut self.state);
        });
    }
}
