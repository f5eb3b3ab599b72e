use serde::{Deserialize, Serialize};

/// SQLite column affinity inferred for a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        }
    }
}

/// A single typed cell value ready to be bound into an INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

/// In-memory tabular dataset: ordered columns, inferred types, typed rows.
///
/// Column order follows the CSV header exactly. Types are inferred per
/// column over the non-empty values: all i64 parseable -> Integer, else all
/// f64 parseable -> Real, else Text. Empty fields become Null.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    column_types: Vec<ColumnType>,
    rows: Vec<Vec<FieldValue>>,
}

impl Dataset {
    pub fn from_records(columns: Vec<String>, raw_rows: Vec<Vec<String>>) -> Self {
        let column_types = infer_column_types(columns.len(), &raw_rows);

        let rows = raw_rows
            .into_iter()
            .map(|raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(idx, cell)| coerce_field(&cell, column_types[idx]))
                    .collect()
            })
            .collect();

        Self {
            columns,
            column_types,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.column_types
    }

    pub fn rows(&self) -> &[Vec<FieldValue>] {
        &self.rows
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn infer_column_types(column_count: usize, raw_rows: &[Vec<String>]) -> Vec<ColumnType> {
    (0..column_count)
        .map(|idx| {
            let mut saw_value = false;
            let mut all_integer = true;
            let mut all_real = true;

            for row in raw_rows {
                let cell = row[idx].trim();
                if cell.is_empty() {
                    continue;
                }
                saw_value = true;

                if all_integer && cell.parse::<i64>().is_err() {
                    all_integer = false;
                }
                if all_real && cell.parse::<f64>().is_err() {
                    all_real = false;
                }
                if !all_real {
                    break;
                }
            }

            if !saw_value {
                // Columns with no values at all get neutral affinity
                ColumnType::Text
            } else if all_integer {
                ColumnType::Integer
            } else if all_real {
                ColumnType::Real
            } else {
                ColumnType::Text
            }
        })
        .collect()
}

fn coerce_field(cell: &str, column_type: ColumnType) -> FieldValue {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return FieldValue::Null;
    }

    match column_type {
        ColumnType::Integer => trimmed
            .parse::<i64>()
            .map(FieldValue::Integer)
            .unwrap_or_else(|_| FieldValue::Text(cell.to_string())),
        ColumnType::Real => trimmed
            .parse::<f64>()
            .map(FieldValue::Real)
            .unwrap_or_else(|_| FieldValue::Text(cell.to_string())),
        ColumnType::Text => FieldValue::Text(cell.to_string()),
    }
}
