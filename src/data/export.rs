use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;

/// Default file name offered by the export save dialog.
pub const EXPORT_FILE_NAME: &str = "exported_data.csv";

// ---------------------------------------------------------------------------
// CSV export of the visible columns
// ---------------------------------------------------------------------------

/// Serialize the given rows of `dataset`, projected down to `columns`, as
/// CSV: one header record followed by one record per row index. Null and
/// missing cells serialize as the empty string.
pub fn write_csv<W: Write>(
    dataset: &Dataset,
    indices: &[usize],
    columns: &[String],
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(columns).context("writing CSV header")?;
    for &i in indices {
        let record: Vec<String> = columns
            .iter()
            .map(|col| dataset.cell(i, col).to_string())
            .collect();
        wtr.write_record(&record)
            .with_context(|| format!("writing CSV row {i}"))?;
    }
    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

/// Write the projected CSV to a file on disk.
pub fn export_csv(
    dataset: &Dataset,
    indices: &[usize],
    columns: &[String],
    path: &Path,
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(dataset, indices, columns, file)
        .with_context(|| format!("exporting to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Row};

    fn sample() -> Dataset {
        let rows: Vec<Row> = vec![
            [
                ("name".to_string(), CellValue::String("Al".into())),
                ("age".to_string(), CellValue::Integer(30)),
                ("note".to_string(), CellValue::Null),
            ]
            .into_iter()
            .collect(),
            [
                ("name".to_string(), CellValue::String("Bo".into())),
                ("age".to_string(), CellValue::Integer(25)),
                ("note".to_string(), CellValue::String("tall".into())),
            ]
            .into_iter()
            .collect(),
        ];
        Dataset::new(
            vec!["name".into(), "age".into(), "note".into()],
            rows,
        )
        .unwrap()
    }

    fn export_to_string(ds: &Dataset, indices: &[usize], columns: &[String]) -> String {
        let mut buf = Vec::new();
        write_csv(ds, indices, columns, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn exports_one_record_per_row_plus_header() {
        let ds = sample();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let out = export_to_string(&ds, &indices, &ds.columns);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), ds.len() + 1);
        assert_eq!(lines[0], "name,age,note");
        assert_eq!(lines[1], "Al,30,");
        assert_eq!(lines[2], "Bo,25,tall");
    }

    #[test]
    fn projects_down_to_the_visible_columns() {
        let ds = sample();
        let visible = vec!["name".to_string()];
        let out = export_to_string(&ds, &[0, 1], &visible);
        assert_eq!(out, "name\nAl\nBo\n");
    }

    #[test]
    fn exports_only_the_given_indices() {
        let ds = sample();
        let out = export_to_string(&ds, &[1], &ds.columns);
        assert_eq!(out, "name,age,note\nBo,25,tall\n");
    }

    #[test]
    fn round_trips_through_a_file() {
        let ds = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        let indices: Vec<usize> = (0..ds.len()).collect();
        export_csv(&ds, &indices, &ds.columns, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("name,age,note\n"));
        assert_eq!(text.lines().count(), 3);
    }
}
