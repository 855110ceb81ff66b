use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common JSON scalar types.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord so cells can be compared for sorting --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) | Float(_) => 2,
                String(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            // Null cells render as the empty string everywhere.
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Lower-cased text form used for substring matching.
    pub fn filter_text(&self) -> String {
        self.to_string().to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the dataset
// ---------------------------------------------------------------------------

/// A single row: column name → value. Columns a row omits read as Null.
pub type Row = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Dataset – the complete in-memory table
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("row {row}: unknown column '{column}'")]
    UnknownColumn { row: usize, column: String },
    #[error("duplicate column '{column}' in schema")]
    DuplicateColumn { column: String },
}

/// An ordered sequence of rows with an explicit column schema.
///
/// `columns` keeps the source order (CSV header order, or the key order of
/// the first JSON object). Rows may omit columns but may not introduce
/// columns outside the schema.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, validating every row against the schema.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self, SchemaError> {
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].contains(col) {
                return Err(SchemaError::DuplicateColumn {
                    column: col.clone(),
                });
            }
        }
        for (i, row) in rows.iter().enumerate() {
            for key in row.keys() {
                if !columns.contains(key) {
                    return Err(SchemaError::UnknownColumn {
                        row: i,
                        column: key.clone(),
                    });
                }
            }
        }
        Ok(Dataset { columns, rows })
    }

    /// Cell lookup; missing cells read as [`CellValue::Null`].
    pub fn cell<'a>(&'a self, row: usize, column: &str) -> &'a CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&CellValue::Null)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Order `indices` by the given column, Nulls first (or last when
/// descending). Ties keep their relative order.
pub fn sort_indices(dataset: &Dataset, indices: &mut [usize], column: &str, descending: bool) {
    indices.sort_by(|&a, &b| {
        let va = dataset.cell(a, column);
        let vb = dataset.cell(b, column);
        let ord = va.cmp(vb);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}
