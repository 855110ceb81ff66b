use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export::EXPORT_FILE_NAME;
use crate::data::filter::FilterCriteria;
use crate::session::Session;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter inputs and column manager
// ---------------------------------------------------------------------------

/// Render the left panel: one filter input per column plus the column
/// visibility checkboxes.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let columns = match &state.dataset {
        Some(ds) => ds.columns.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Per-column filter inputs ----
            for col in &columns {
                ui.label(col);
                let draft = state.filter_drafts.entry(col.clone()).or_default();
                ui.add(
                    egui::TextEdit::singleline(draft)
                        .hint_text("contains…")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(4.0);
            }

            if ui.button("Apply Filters").clicked() {
                state.apply_filters();
            }

            ui.separator();

            // ---- Column visibility ----
            ui.strong("Columns");
            if ui.small_button("Deselect All").clicked() {
                state.deselect_all_columns();
            }
            for col in &columns {
                let mut checked = state.visible_columns.contains(col);
                if ui.checkbox(&mut checked, col).changed() {
                    state.toggle_column(col);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(
    ui: &mut Ui,
    state: &mut AppState,
    session: Option<&Session>,
    initial_criteria: &FilterCriteria,
) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state, initial_criteria);
                ui.close_menu();
            }
            if ui.button("Export CSV…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} matching",
                ds.len(),
                state.filtered_indices.len()
            ));
            ui.separator();

            if ui.selectable_label(state.preview, "Preview").clicked() {
                state.preview = !state.preview;
            }
        }

        if let Some(session) = session {
            ui.separator();
            if ui.button("Log out").clicked() {
                logout(state, session);
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Dialogs and session actions
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, initial_criteria: &FilterCriteria) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.columns
                );
                state.set_dataset(dataset, initial_criteria.clone());
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn export_dialog(state: &mut AppState) {
    if state.dataset.is_none() {
        state.status_message = Some("Nothing to export".to_string());
        return;
    }

    let file = rfd::FileDialog::new()
        .set_title("Export visible data")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match state.export_visible(&path) {
            Ok(()) => {
                log::info!(
                    "Exported {} rows to {}",
                    state.filtered_indices.len(),
                    path.display()
                );
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

/// Log out of the server session, then return to the start screen.
fn logout(state: &mut AppState, session: &Session) {
    match session.logout() {
        Ok(()) => *state = AppState::default(),
        Err(e) => {
            log::error!("Logout failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
