//! Min/max filtering over a numeric column.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use longdata_model::{CellValue, Record};

use crate::MapError;

/// Which end of a numeric column to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

impl Extremum {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extremum {
    type Err = MapError;

    /// Accepts `min`/`max` in any case, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("min") {
            Ok(Self::Min)
        } else if token.eq_ignore_ascii_case("max") {
            Ok(Self::Max)
        } else {
            Err(MapError::InvalidOperation(token.to_string()))
        }
    }
}

/// Keeps every record whose `column` value equals the column minimum or maximum.
///
/// Records with a missing value are dropped before the extremum is computed.
/// The kept records carry the cast value as [`CellValue::Number`] in `column`.
/// Input order is preserved among ties. An all-missing column yields no records.
pub fn filter_extremum(
    records: Vec<Record>,
    column: &str,
    extremum: Extremum,
) -> Result<Vec<Record>, MapError> {
    let mut present = Vec::with_capacity(records.len());
    for mut record in records {
        let value = match record.get(column) {
            CellValue::Missing => continue,
            CellValue::Number(value) => *value,
            CellValue::Text(text) => parse_number(column, text)?,
        };
        record.insert(column, CellValue::Number(value));
        present.push((value, record));
    }

    let target = present.iter().map(|(value, _)| *value).reduce(|acc, value| match extremum {
        Extremum::Min => acc.min(value),
        Extremum::Max => acc.max(value),
    });
    let Some(target) = target else {
        debug!(column, "no values present for extremum filter");
        return Ok(Vec::new());
    };

    let kept: Vec<Record> = present
        .into_iter()
        .filter(|(value, _)| *value == target)
        .map(|(_, record)| record)
        .collect();
    debug!(column, %extremum, target, kept = kept.len(), "filtered extremum");
    Ok(kept)
}

fn parse_number(column: &str, text: &str) -> Result<f64, MapError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .ok_or_else(|| MapError::TypeConversion {
            column: column.to_string(),
            value: text.to_string(),
        })
}
