//! Pure transforms from loaded tables to display values.
//!
//! Every transform returns a new table; inputs are never mutated.

mod distribution;

pub use distribution::{CategoryCount, CategoryDistribution, count_by_category};

use crate::artifact::{Table, Value};
use crate::error::{ReportError, Result};

/// Keep only `columns`, in the order given, preserving row order.
///
/// # Errors
/// Returns `UnknownColumns` naming every requested column the table lacks.
pub fn project<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<Table> {
    let missing = table.missing_columns(columns);
    if !missing.is_empty() {
        return Err(ReportError::UnknownColumns { columns: missing });
    }

    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|c| table.column_index(c.as_ref()))
        .collect();
    let header = indices
        .iter()
        .map(|&i| table.columns()[i].clone())
        .collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
        .collect();

    Ok(Table::from_parts(header, rows))
}

/// Multiply every value of `column` by 100.
///
/// Linear and deliberately not idempotent: applying it twice scales by 10 000.
/// Empty cells stay empty; integers stay integers unless the product overflows.
///
/// # Errors
/// Returns `UnknownColumns` for a missing column and `NonNumericCell` for text.
pub fn scale_to_percent(table: &Table, column: &str) -> Result<Table> {
    let idx = table.require_column(column)?;

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let scaled = scale_cell(&row[idx]).ok_or_else(|| ReportError::NonNumericCell {
                column: column.to_string(),
                row: row_idx,
                value: row[idx].to_string(),
            })?;
            let mut row = row.clone();
            row[idx] = scaled;
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Table::from_parts(table.columns().to_vec(), rows))
}

#[allow(clippy::cast_precision_loss)]
fn scale_cell(value: &Value) -> Option<Value> {
    match value {
        Value::Integer { value, .. } => Some(
            value
                .checked_mul(100)
                .map_or_else(|| Value::float(*value as f64 * 100.0), Value::integer),
        ),
        Value::Float { value, .. } => Some(Value::float(value * 100.0)),
        Value::Empty => Some(Value::Empty),
        Value::Text(_) => None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
