//! Error types for ranking and filtering operations.

use std::fmt;

/// Errors from ranking and filtering operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Extremum operation token was neither `min` nor `max`.
    InvalidOperation(String),
    /// A present value could not be cast to a number.
    TypeConversion { column: String, value: String },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperation(op) => {
                write!(f, "invalid operation '{op}', expected 'min' or 'max'")
            }
            Self::TypeConversion { column, value } => {
                write!(f, "cannot convert '{value}' in column '{column}' to a number")
            }
        }
    }
}

impl std::error::Error for MapError {}
