use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data table (central panel)
// ---------------------------------------------------------------------------

/// Render the data grid in the central panel.
pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view data  (File → Open…)");
        });
        return;
    };

    let visible = state.visible_column_list();
    let indices: Vec<usize> = state.display_indices().to_vec();

    if indices.is_empty() || visible.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No data to display");
        });
        return;
    }

    if state.preview {
        ui.label(
            RichText::new(format!(
                "Showing first {} rows of {} total rows",
                indices.len(),
                state.filtered_indices.len()
            ))
            .small(),
        );
    }

    // Header clicks are collected here and applied after rendering, once
    // the dataset borrow is released.
    let mut sort_clicked: Option<String> = None;
    let sort = state.sort.clone();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0).clip(true), visible.len())
        .header(22.0, |mut header| {
            for col in &visible {
                header.col(|ui: &mut Ui| {
                    let marker = match &sort {
                        Some(s) if s.column == *col => {
                            if s.descending {
                                " ▼"
                            } else {
                                " ▲"
                            }
                        }
                        _ => "",
                    };
                    let text = RichText::new(format!("{col}{marker}")).strong();
                    if ui.selectable_label(false, text).clicked() {
                        sort_clicked = Some(col.clone());
                    }
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let idx = indices[row.index()];
                for col in &visible {
                    row.col(|ui: &mut Ui| {
                        ui.label(dataset.cell(idx, col).to_string());
                    });
                }
            });
        });

    if let Some(col) = sort_clicked {
        state.sort_by(&col);
    }
}
