//! Dataset ingestion for longevity lookups.
//!
//! Every cell is read as text; blank cells become missing values. Loading is
//! done fresh for each query, nothing is cached.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use longdata_ingest::{Delimiter, read_dataset};
//!
//! let dataset = read_dataset(Path::new("data/anage_data.csv"), Delimiter::Comma)?;
//! dataset.require_columns(&["Genus", "Species", "Common name"])?;
//! ```

mod dataset;
mod error;

// === Error Types ===
pub use error::{DatasetError, Result};

// === Dataset Reading ===
pub use dataset::{Dataset, Delimiter, read_dataset};
