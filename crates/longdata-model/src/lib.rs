#![deny(unsafe_code)]

pub mod error;
pub mod record;
pub mod vocabulary;

pub use error::ModelError;
pub use record::{CellValue, Record, ScoredRecord};
pub use vocabulary::Vocabulary;
