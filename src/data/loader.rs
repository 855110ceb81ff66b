use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{CellValue, Dataset, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row gives the column schema; cell types are guessed
/// * `.json` – `[{ "col": value, ... }, ...]`; the first object's key order
///   gives the column schema
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "name": "Fuji", "type": "apple", "weight": 180.5, "organic": true },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    // Column order comes from the first record's keys (preserve_order keeps
    // the source order of the serde_json map).
    let columns: Vec<String> = records
        .first()
        .and_then(|rec| rec.as_object())
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let row: Row = obj
            .iter()
            .map(|(key, val)| (key.clone(), json_to_cell(val)))
            .collect();
        rows.push(row);
    }

    Dataset::new(columns, rows).context("validating JSON rows against the schema")
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per data row.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let row: Row = columns
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.clone(), guess_cell_type(value)))
            .collect();
        rows.push(row);
    }

    Dataset::new(columns, rows).context("validating CSV rows against the schema")
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_header_order_becomes_the_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "fruit.csv", "zeta,alpha,mid\n1,x,true\n,y,false\n");
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.columns, vec!["zeta", "alpha", "mid"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(*ds.cell(0, "zeta"), CellValue::Integer(1));
        assert_eq!(*ds.cell(0, "mid"), CellValue::Bool(true));
        assert_eq!(*ds.cell(1, "zeta"), CellValue::Null);
    }

    #[test]
    fn json_first_object_key_order_becomes_the_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "fruit.json",
            r#"[{"zeta": 1, "alpha": "x", "score": 2.5}, {"alpha": "y", "zeta": null, "score": 3}]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.columns, vec!["zeta", "alpha", "score"]);
        assert_eq!(*ds.cell(0, "score"), CellValue::Float(2.5));
        assert_eq!(*ds.cell(1, "zeta"), CellValue::Null);
        assert_eq!(*ds.cell(1, "score"), CellValue::Integer(3));
    }

    #[test]
    fn json_rows_with_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(
            &dir,
            "bad.json",
            r#"[{"a": 1}, {"a": 2, "b": 3}]"#,
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn empty_inputs_load_as_empty_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let json = write_temp(&dir, "empty.json", "[]");
        let ds = load_file(&json).unwrap();
        assert!(ds.is_empty());
        assert!(ds.columns.is_empty());
    }

    #[test]
    fn unsupported_extensions_are_refused() {
        assert!(load_file(Path::new("data.parquet")).is_err());
    }
}
