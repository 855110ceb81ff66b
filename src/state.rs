use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::data::export;
use crate::data::filter::{criteria_from_drafts, filtered_indices, FilterCriteria};
use crate::data::model::{sort_indices, Dataset};

/// Number of rows shown when preview mode is on.
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Active sort order for the table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub column: String,
    pub descending: bool,
}

/// Snapshot of the table component's interaction state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub criteria: FilterCriteria,
    /// Visible columns in schema order.
    pub visible_columns: Vec<String>,
    pub total_rows: usize,
    pub filtered_rows: usize,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Raw text of the per-column filter inputs.
    pub filter_drafts: BTreeMap<String, String>,

    /// Applied filter criteria (blank drafts skipped).
    pub criteria: FilterCriteria,

    /// Columns currently rendered and exported.
    pub visible_columns: BTreeSet<String>,

    /// Indices of rows passing the current filters (cached).
    pub filtered_indices: Vec<usize>,

    /// Sort applied on top of the filtered rows.
    pub sort: Option<SortOrder>,

    /// Whether the table body is limited to the first [`PREVIEW_ROWS`] rows.
    pub preview: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filter_drafts: BTreeMap::new(),
            criteria: FilterCriteria::new(),
            visible_columns: BTreeSet::new(),
            filtered_indices: Vec::new(),
            sort: None,
            preview: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: all columns visible, one filter draft
    /// per column (seeded from `initial_criteria`), filters applied.
    pub fn set_dataset(&mut self, dataset: Dataset, initial_criteria: FilterCriteria) {
        self.visible_columns = dataset.columns.iter().cloned().collect();
        self.filter_drafts = dataset
            .columns
            .iter()
            .map(|col| {
                let draft = initial_criteria.get(col).cloned().unwrap_or_default();
                (col.clone(), draft)
            })
            .collect();
        self.sort = None;
        self.preview = false;
        self.status_message = None;
        self.dataset = Some(dataset);
        self.apply_filters();
    }

    /// Rebuild the criteria from the current drafts and recompute the
    /// filtered row set. Blank drafts mean "no filter on that column".
    pub fn apply_filters(&mut self) {
        self.criteria = criteria_from_drafts(&self.filter_drafts);
        self.refilter();
    }

    fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.filtered_indices = filtered_indices(ds, &self.criteria);
            if let Some(sort) = &self.sort {
                sort_indices(ds, &mut self.filtered_indices, &sort.column, sort.descending);
            }
        } else {
            self.filtered_indices.clear();
        }
    }

    /// Add or remove a column from the visible set.
    pub fn toggle_column(&mut self, column: &str) {
        if !self.visible_columns.remove(column) {
            self.visible_columns.insert(column.to_string());
        }
    }

    /// Hide every column.
    pub fn deselect_all_columns(&mut self) {
        self.visible_columns.clear();
    }

    /// Visible columns in schema order.
    pub fn visible_column_list(&self) -> Vec<String> {
        match &self.dataset {
            Some(ds) => ds
                .columns
                .iter()
                .filter(|c| self.visible_columns.contains(*c))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Sort by `column`; clicking the active column flips the direction.
    pub fn sort_by(&mut self, column: &str) {
        let descending = match &self.sort {
            Some(sort) if sort.column == column => !sort.descending,
            _ => false,
        };
        self.sort = Some(SortOrder {
            column: column.to_string(),
            descending,
        });
        self.refilter();
    }

    /// Row indices to render, truncated in preview mode.
    pub fn display_indices(&self) -> &[usize] {
        if self.preview {
            let n = self.filtered_indices.len().min(PREVIEW_ROWS);
            &self.filtered_indices[..n]
        } else {
            &self.filtered_indices
        }
    }

    /// Snapshot of criteria, visible columns and row counts.
    pub fn current_state(&self) -> Snapshot {
        Snapshot {
            criteria: self.criteria.clone(),
            visible_columns: self.visible_column_list(),
            total_rows: self.dataset.as_ref().map_or(0, Dataset::len),
            filtered_rows: self.filtered_indices.len(),
        }
    }

    /// Export the filtered rows, projected to the visible columns, as CSV.
    pub fn export_visible(&self, path: &Path) -> anyhow::Result<()> {
        let Some(ds) = &self.dataset else {
            anyhow::bail!("no dataset loaded");
        };
        export::export_csv(ds, &self.filtered_indices, &self.visible_column_list(), path)
    }
}
