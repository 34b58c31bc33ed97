#![deny(unsafe_code)]

pub mod error;
pub mod table;

pub use error::OutputError;
pub use table::{
    CELL_SEPARATOR, DEFAULT_MAX_ROWS, NULL_SENTINEL, ROW_SEPARATOR, TableSerializer, serialize,
};
