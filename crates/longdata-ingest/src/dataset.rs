use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use longdata_model::{CellValue, Record};

use crate::error::{DatasetError, Result};

/// Field separator of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Semicolon => b';',
            Self::Tab => b'\t',
        }
    }
}

/// A fully loaded dataset: header row plus one [`Record`] per data row.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    /// Fails with [`DatasetError::MissingColumn`] on the first absent column.
    pub fn require_columns(&self, columns: &[&str]) -> Result<()> {
        match columns.iter().find(|column| !self.has_column(column)) {
            Some(column) => Err(DatasetError::MissingColumn {
                column: (*column).to_string(),
                path: self.path.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn csv_error(path: &Path, err: csv::Error) -> DatasetError {
    if err.is_io_error() {
        if let csv::ErrorKind::Io(source) = err.into_kind() {
            return DatasetError::Read {
                path: path.to_path_buf(),
                source,
            };
        }
        return DatasetError::Malformed {
            path: path.to_path_buf(),
            message: "unreadable input".to_string(),
        };
    }
    DatasetError::Malformed {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Reads a delimited file with a header row into memory.
///
/// Every cell stays text; blank cells become [`CellValue::Missing`]. Rows with
/// a different field count than the header are rejected as malformed.
pub fn read_dataset(path: &Path, delimiter: Delimiter) -> Result<Dataset> {
    if !path.is_file() {
        return Err(DatasetError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter.as_byte())
        .from_path(path)
        .map_err(|err| csv_error(path, err))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| csv_error(path, err))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(DatasetError::Malformed {
            path: path.to_path_buf(),
            message: "missing header row".to_string(),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|err| csv_error(path, err))?;
        let mut record = Record::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            record.insert(header.as_str(), CellValue::from_raw(value));
        }
        records.push(record);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = records.len(),
        "loaded dataset"
    );

    Ok(Dataset {
        path: path.to_path_buf(),
        headers,
        records,
    })
}
