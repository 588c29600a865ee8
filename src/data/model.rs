use std::collections::{BTreeMap, BTreeSet};

use crate::error::{OutlierError, Result};

// ---------------------------------------------------------------------------
// Value – a single cell in a column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

impl Value {
    /// Interpret the value as an `f64`. Only `Integer` and `Float` qualify.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Short dtype name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Date(_) => "date",
            Value::Null => "null",
        }
    }

    /// Null cells and NaN floats both count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one row of the source table
// ---------------------------------------------------------------------------

static NULL: Value = Value::Null;

/// A single row together with its position in the dataset it was loaded
/// into. The position survives filtering, like a Pandas index label.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    /// Dynamic columns: column_name → value.
    pub values: BTreeMap<String, Value>,
}

impl Row {
    /// Cell for `column`; an absent key reads as `Null`.
    pub fn get(&self, column: &str) -> &Value {
        self.values.get(column).unwrap_or(&NULL)
    }
}

// ---------------------------------------------------------------------------
// Dataset – an ordered collection of rows
// ---------------------------------------------------------------------------

/// An in-memory table. Rows keep their original order and index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub rows: Vec<Row>,
    /// Ordered list of column names.
    pub column_names: Vec<String>,
}

impl Dataset {
    /// Build a dataset from record maps, numbering rows from zero.
    /// Column names are the sorted union of all record keys.
    pub fn from_records(records: Vec<BTreeMap<String, Value>>) -> Self {
        let mut column_names_set: BTreeSet<String> = BTreeSet::new();
        for rec in &records {
            column_names_set.extend(rec.keys().cloned());
        }
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, values)| Row { index, values })
            .collect();
        Dataset {
            rows,
            column_names: column_names_set.into_iter().collect(),
        }
    }

    /// Build a dataset from named, equally sized columns. Column order is kept.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<Value>)>) -> Result<Self> {
        let columns: Vec<(String, Vec<Value>)> =
            columns.into_iter().map(|(n, v)| (n.into(), v)).collect();
        let n_rows = columns.first().map_or(0, |(_, v)| v.len());
        if let Some((_, bad)) = columns.iter().find(|(_, v)| v.len() != n_rows) {
            return Err(OutlierError::LengthMismatch {
                expected: n_rows,
                found: bad.len(),
            });
        }

        let column_names: Vec<String> = columns.iter().map(|(n, _)| n.clone()).collect();
        let mut rows: Vec<Row> = (0..n_rows)
            .map(|index| Row {
                index,
                values: BTreeMap::new(),
            })
            .collect();
        for (name, values) in columns {
            for (row, value) in rows.iter_mut().zip(values) {
                row.values.insert(name.clone(), value);
            }
        }
        Ok(Dataset { rows, column_names })
    }

    /// Empty dataset carrying the same columns as `self`.
    pub fn empty_like(&self) -> Self {
        Dataset {
            rows: Vec::new(),
            column_names: self.column_names.clone(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// Row indices in order.
    pub fn indices(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.index).collect()
    }

    /// All cells of a column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&Value>> {
        if !self.has_column(name) {
            return Err(OutlierError::MissingColumn(name.to_string()));
        }
        Ok(self.rows.iter().map(|r| r.get(name)).collect())
    }

    /// Numeric view of a column: `None` marks a missing cell.
    ///
    /// Only integer and float cells are accepted. Any other type fails with
    /// [`OutlierError::NonNumericColumn`] instead of being coerced.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        self.column(name)?
            .into_iter()
            .zip(&self.rows)
            .map(|(value, row)| {
                if value.is_missing() {
                    return Ok(None);
                }
                value
                    .as_f64()
                    .map(Some)
                    .ok_or_else(|| OutlierError::NonNumericColumn {
                        column: name.to_string(),
                        row: row.index,
                        found: value.type_name(),
                    })
            })
            .collect()
    }
}
