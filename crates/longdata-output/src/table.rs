//! Delimited text rendering of tabular lookup results.
//!
//! Output layout, consumed by a language model reading tool output:
//!
//! ```text
//! Science name ; Common name ; Body mass (g)
//! Canis familiaris ; Dog ; 4500
//! Rana temporaria ; Frog ; unknown
//! ```
//!
//! The header lists the selected columns, each following line is one record.
//! There is no trailing newline.

use longdata_model::Record;

use crate::OutputError;

/// Separator between cells of a line.
pub const CELL_SEPARATOR: &str = " ; ";
/// Separator between lines.
pub const ROW_SEPARATOR: &str = "\n";
/// Rendered in place of missing values.
pub const NULL_SENTINEL: &str = "unknown";
/// Data rows emitted when no cap is configured.
pub const DEFAULT_MAX_ROWS: usize = 8;

/// Renders records as header plus capped data lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSerializer {
    max_rows: usize,
}

impl Default for TableSerializer {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl TableSerializer {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Serializes the first `max_rows` records in input order.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::EmptyColumnSet`] when `columns` is empty.
    pub fn serialize<S: AsRef<str>>(
        &self,
        columns: &[S],
        rows: &[Record],
    ) -> Result<String, OutputError> {
        if columns.is_empty() {
            return Err(OutputError::EmptyColumnSet);
        }

        let mut lines = Vec::with_capacity(1 + rows.len().min(self.max_rows));
        lines.push(
            columns
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(CELL_SEPARATOR),
        );
        for record in rows.iter().take(self.max_rows) {
            lines.push(render_row(columns, record));
        }
        Ok(lines.join(ROW_SEPARATOR))
    }
}

/// Serializes with the default row cap.
pub fn serialize<S: AsRef<str>>(columns: &[S], rows: &[Record]) -> Result<String, OutputError> {
    TableSerializer::default().serialize(columns, rows)
}

fn render_row<S: AsRef<str>>(columns: &[S], record: &Record) -> String {
    columns
        .iter()
        .map(|column| {
            record
                .get(column.as_ref())
                .as_text()
                .unwrap_or_else(|| NULL_SENTINEL.to_string())
        })
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use longdata_model::CellValue;

    use super::*;

    #[test]
    fn header_only_for_empty_rows() {
        let out = serialize(&["rsid", "allele", "zygosity", "weight"], &[]).unwrap();
        assert_eq!(out, "rsid ; allele ; zygosity ; weight");
    }

    #[test]
    fn empty_columns_fail() {
        let columns: [&str; 0] = [];
        assert_eq!(
            serialize(&columns, &[Record::new()]),
            Err(OutputError::EmptyColumnSet)
        );
    }

    #[test]
    fn missing_cells_render_sentinel() {
        let record = Record::from_pairs([("Species", CellValue::Missing)]);
        let out = serialize(&["Species", "Genus"], &[record]).unwrap();
        assert_eq!(out, "Species ; Genus\nunknown ; unknown");
    }

    #[test]
    fn rows_are_capped() {
        let rows: Vec<Record> = (0..20)
            .map(|idx| Record::from_pairs([("n", idx.to_string())]))
            .collect();
        let out = TableSerializer::new(8).serialize(&["n"], &rows).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[8], "7");
        assert!(!out.ends_with('\n'));
    }
}
