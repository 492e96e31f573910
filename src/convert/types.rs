//! Column type inference
//!
//! Samples up to the first ten data rows and classifies each column as
//! string, float, or integer. The vote per column widens: any string forces
//! `Str`, otherwise any float forces `Float`, otherwise `Int`. Missing fields
//! are neutral votes. Inference never fails.

use super::rows::Row;

/// Number of data rows sampled per column.
pub const SAMPLE_SIZE: usize = 10;

/// Best-guess scalar type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Str,
    Float,
    Int,
}

impl ColumnType {
    /// True for `Int` and `Float`, whose raw text renders unquoted.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Float)
    }
}

/// Classify a single field value: integer parse first, then float, else string.
pub fn classify(field: &str) -> ColumnType {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return ColumnType::Str;
    }
    if trimmed.parse::<i64>().is_ok() {
        ColumnType::Int
    } else if trimmed.parse::<f64>().is_ok() {
        ColumnType::Float
    } else {
        ColumnType::Str
    }
}

/// Infer one type per column from a bounded sample of rows.
///
/// Columns that never receive a vote (all fields missing, or zero rows)
/// default to `Int`, which only affects how nulls are labeled downstream.
pub fn infer(rows: impl Iterator<Item = Row>, column_count: usize) -> Vec<ColumnType> {
    let mut saw_str = vec![false; column_count];
    let mut saw_float = vec![false; column_count];

    for row in rows.take(SAMPLE_SIZE) {
        for (col, field) in row.iter().enumerate().take(column_count) {
            let Some(value) = field else { continue };
            match classify(value) {
                ColumnType::Str => saw_str[col] = true,
                ColumnType::Float => saw_float[col] = true,
                ColumnType::Int => {}
            }
        }
    }

    (0..column_count)
        .map(|col| {
            if saw_str[col] {
                ColumnType::Str
            } else if saw_float[col] {
                ColumnType::Float
            } else {
                ColumnType::Int
            }
        })
        .collect()
}
