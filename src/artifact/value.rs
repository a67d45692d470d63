//! Typed table cells.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single cell of a loaded artifact.
///
/// Numeric inference happens per cell: integer first, then float, else text.
/// Numeric cells keep the field text they were parsed from, so `1.00` displays
/// as `1.00` and not `1`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer { value: i64, raw: String },
    Float { value: f64, raw: String },
    Text(String),
    Empty,
}

impl Value {
    /// Infer a cell from its raw field text.
    ///
    /// Surrounding whitespace is ignored for numbers only; text keeps the field verbatim.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Integer {
                value,
                raw: trimmed.to_string(),
            };
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Float {
                value,
                raw: trimmed.to_string(),
            },
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Integer cell with its canonical text.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::Integer {
            value,
            raw: value.to_string(),
        }
    }

    /// Float cell with its canonical text.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::Float {
            value,
            raw: value.to_string(),
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer { value, .. } => Some(*value as f64),
            Self::Float { value, .. } => Some(*value),
            Self::Text(_) | Self::Empty => None,
        }
    }

    /// Integer view of the cell; floats qualify only when they carry no fraction.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer { value, .. } => Some(*value),
            Self::Float { value, .. } if value.fract() == 0.0 && value.abs() < 9.0e15 => {
                Some(*value as i64)
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer { .. } | Self::Float { .. })
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer { raw, .. } | Self::Float { raw, .. } | Self::Text(raw) => {
                f.write_str(raw)
            }
            Self::Empty => Ok(()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer { value, .. } => serializer.serialize_i64(*value),
            Self::Float { value, .. } => serializer.serialize_f64(*value),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Empty => serializer.serialize_unit(),
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
