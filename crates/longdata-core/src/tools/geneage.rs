//! GenAge model organism gene lookups.

use tracing::debug;

use longdata_ingest::{Delimiter, read_dataset};
use longdata_map::RecordRanker;
use longdata_model::Record;
use longdata_output::TableSerializer;

use crate::fields::{GENAGE_IDENTITY_FIELDS, GENAGE_OUTPUT_COLUMNS};
use crate::tools::{Destination, LookupTool};
use crate::{LookupConfig, LookupError};

const GENE_INFORMATION_DESCRIPTION: &str = "\
You should use this tool for getting information about longevity genes of model organisms. It \
returns a table where rows are separated with a new line character and columns with \" ; \". \
The table contains genes similar to the query, but only one of them is the gene you need. The \
first row is the header with the fields \"Entrez Gene ID\", \"Gene Symbol\", \"Gene Name\", \
\"Unigene ID\", \"Ensembl ID\", \"Lifespan Effect\", \"Phenotype Description\", \"Longevity \
Influence\" and \"Method\". Input should be a gene symbol, gene name, Entrez, Unigene or Ensembl \
id, for example \"daf-2\". Missing values are shown as \"unknown\". If there is no such gene in \
the table say it is an unknown gene.";

/// Looks up GenAge genes by any identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneInformation;

impl LookupTool for GeneInformation {
    fn name(&self) -> &'static str {
        "gene_information"
    }

    fn destination(&self) -> Destination {
        Destination::Geneage
    }

    fn description(&self) -> &'static str {
        GENE_INFORMATION_DESCRIPTION
    }

    fn run(&self, input: &str, config: &LookupConfig) -> Result<String, LookupError> {
        gene_information(config, input)
    }
}

/// Ranks GenAge models by similarity of the whole input to their identifiers.
pub fn gene_information(config: &LookupConfig, input: &str) -> Result<String, LookupError> {
    let dataset = read_dataset(&config.data.genage, Delimiter::Semicolon)?;
    dataset.require_columns(&GENAGE_OUTPUT_COLUMNS)?;
    let records = dataset.into_records();
    debug!(genes = records.len(), "loaded GenAge records");

    let ranked = RecordRanker::new(GENAGE_IDENTITY_FIELDS).rank(records, input);
    let rows: Vec<Record> = ranked.into_iter().map(|scored| scored.record).collect();
    Ok(TableSerializer::new(config.max_rows).serialize(&GENAGE_OUTPUT_COLUMNS, &rows)?)
}
