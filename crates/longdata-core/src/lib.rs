//! Longevity dataset lookups.
//!
//! Each lookup reads its dataset fresh, resolves fuzzy inputs against the
//! dataset vocabulary, ranks or filters records and renders the result as a
//! `" ; "`-delimited text table for a language model to read.
//!
//! | Destination    | Tool                          | Dataset                    |
//! |----------------|-------------------------------|----------------------------|
//! | `anage`        | `animal_information`          | `anage_data.csv`           |
//! | `anage`        | `animals_min_max_information` | `anage_data.csv`           |
//! | `geneage`      | `gene_information`            | `genage_models.csv`        |
//! | `longevitymap` | `rsid_information`            | `longevitymap_weights.tsv` |
//!
//! PubMed references for an rsid come from `variants.tsv` via
//! [`get_references`].

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod fields;
pub mod input;
pub mod tools;

pub use config::{ConfigError, ConfigFile, DataPaths, LookupConfig};
pub use error::LookupError;
pub use tools::{
    Destination, LookupTool, ToolRegistry, animal_information, animals_min_max_information,
    default_registry, gene_information, get_references, rsid_information,
};
