use std::collections::BTreeMap;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter predicate: substring pattern per column
// ---------------------------------------------------------------------------

/// Per-column filter state: maps column_name → substring pattern.
/// Absent columns mean "no filter" (show all).
pub type FilterCriteria = BTreeMap<String, String>;

/// Build criteria from the raw filter inputs, skipping blank entries and
/// trimming the rest.
pub fn criteria_from_drafts(drafts: &BTreeMap<String, String>) -> FilterCriteria {
    drafts
        .iter()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(col, text)| (col.clone(), text.trim().to_string()))
        .collect()
}

/// Whether row `row` of `dataset` passes every filter in `criteria`.
///
/// A row passes a column filter when the lower-cased text form of its cell
/// (missing/null cells read as "") contains the lower-cased pattern.
/// Filters combine with logical AND.
pub fn row_matches(dataset: &Dataset, row: usize, criteria: &FilterCriteria) -> bool {
    criteria.iter().all(|(col, pattern)| {
        dataset
            .cell(row, col)
            .filter_text()
            .contains(&pattern.to_lowercase())
    })
}

/// Return indices of rows that pass all active filters.
pub fn filtered_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&i| row_matches(dataset, i, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Row};

    fn people() -> Dataset {
        let rows: Vec<Row> = [("Al", 30), ("Bo", 25), ("Cara", 31)]
            .iter()
            .map(|(name, age)| {
                [
                    ("name".to_string(), CellValue::String(name.to_string())),
                    ("age".to_string(), CellValue::Integer(*age)),
                ]
                .into_iter()
                .collect()
            })
            .collect();
        Dataset::new(vec!["name".into(), "age".into()], rows).unwrap()
    }

    #[test]
    fn no_criteria_keeps_everything() {
        let ds = people();
        assert_eq!(
            filtered_indices(&ds, &FilterCriteria::new()),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let ds = people();
        let criteria: FilterCriteria = [("name".to_string(), "a".to_string())].into();
        // "al" and "cara" contain "a"; "bo" does not.
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 2]);

        let upper: FilterCriteria = [("name".to_string(), "AL".to_string())].into();
        assert_eq!(filtered_indices(&ds, &upper), vec![0]);
    }

    #[test]
    fn filters_combine_with_and() {
        let ds = people();
        let criteria: FilterCriteria = [
            ("name".to_string(), "a".to_string()),
            ("age".to_string(), "3".to_string()),
        ]
        .into();
        // "Al"/30 and "Cara"/31 pass both; "Bo"/25 fails the name filter.
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 2]);
    }

    #[test]
    fn numeric_cells_match_on_their_text_form() {
        let ds = people();
        let criteria: FilterCriteria = [("age".to_string(), "25".to_string())].into();
        assert_eq!(filtered_indices(&ds, &criteria), vec![1]);
    }

    #[test]
    fn missing_cells_match_against_empty_string() {
        let ds = Dataset::new(
            vec!["name".into(), "note".into()],
            vec![
                [("name".to_string(), CellValue::String("Al".into()))]
                    .into_iter()
                    .collect(),
            ],
        )
        .unwrap();
        let criteria: FilterCriteria = [("note".to_string(), "x".to_string())].into();
        assert!(filtered_indices(&ds, &criteria).is_empty());
        // The empty pattern is contained in "".
        let empty: FilterCriteria = [("note".to_string(), "".to_string())].into();
        assert_eq!(filtered_indices(&ds, &empty), vec![0]);
    }

    #[test]
    fn drafts_skip_blanks_and_trim() {
        let drafts: BTreeMap<String, String> = [
            ("name".to_string(), "  al ".to_string()),
            ("age".to_string(), "   ".to_string()),
            ("note".to_string(), String::new()),
        ]
        .into();
        let criteria = criteria_from_drafts(&drafts);
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria.get("name").map(String::as_str), Some("al"));
    }
}
