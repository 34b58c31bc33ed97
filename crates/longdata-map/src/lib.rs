//! Fuzzy matching for longevity dataset lookups.
//!
//! - [`FieldResolver`] maps a free-text column hint onto a fixed vocabulary.
//! - [`RecordRanker`] orders dataset records by similarity to a query.
//! - [`filter_extremum`] keeps the records holding a column's min or max.

#![deny(unsafe_code)]

mod error;
mod extremum;
mod ranker;
mod resolver;
mod score;

pub use error::MapError;
pub use extremum::{Extremum, filter_extremum};
pub use ranker::RecordRanker;
pub use resolver::{FieldCandidate, FieldResolver};
pub use score::{fold_case, pad, partial_ratio};
