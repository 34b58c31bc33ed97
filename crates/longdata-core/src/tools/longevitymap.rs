//! LongevityMap variant lookups.

use tracing::debug;

use longdata_ingest::{Delimiter, read_dataset};
use longdata_model::Record;
use longdata_output::TableSerializer;

use crate::fields::{LONGEVITYMAP_OUTPUT_COLUMNS, PUBMED_URL_PREFIX, QUICKPUBMED, RSID};
use crate::tools::{Destination, LookupTool};
use crate::{LookupConfig, LookupError};

const RSID_INFORMATION_DESCRIPTION: &str = "\
You should use this tool for getting information about the longevity effect of a genetic \
variant. It returns a table where rows are separated with a new line character and columns with \
\" ; \". The first row is the header with the fields \"rsid\", \"allele\", \"zygosity\" and \
\"weight\". A positive weight means the allele and zygosity are associated with longer life, a \
negative weight with shorter life. Input should be an rsid, for example \"rs7412\". If the table \
has no data rows say there is no information about this rsid.";

/// Looks up LongevityMap allele weights for one rsid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RsidInformation;

impl LookupTool for RsidInformation {
    fn name(&self) -> &'static str {
        "rsid_information"
    }

    fn destination(&self) -> Destination {
        Destination::Longevitymap
    }

    fn description(&self) -> &'static str {
        RSID_INFORMATION_DESCRIPTION
    }

    fn run(&self, input: &str, config: &LookupConfig) -> Result<String, LookupError> {
        rsid_information(config, input)
    }
}

/// Weight rows whose `rsid` equals the trimmed input, in dataset order.
pub fn rsid_information(config: &LookupConfig, input: &str) -> Result<String, LookupError> {
    let rsid = input.trim();
    let dataset = read_dataset(&config.data.longevitymap_weights, Delimiter::Tab)?;
    dataset.require_columns(&LONGEVITYMAP_OUTPUT_COLUMNS)?;
    let rows: Vec<Record> = dataset
        .into_records()
        .into_iter()
        .filter(|record| matches_rsid(record, rsid))
        .collect();
    debug!(rsid, matches = rows.len(), "filtered LongevityMap weights");
    Ok(TableSerializer::new(config.max_rows).serialize(&LONGEVITYMAP_OUTPUT_COLUMNS, &rows)?)
}

/// PubMed URLs for every variant row of `rsid`, newline-joined.
///
/// Rows without a PubMed id are skipped; no match yields an empty string.
pub fn get_references(config: &LookupConfig, rsid: &str) -> Result<String, LookupError> {
    let dataset = read_dataset(&config.data.variants, Delimiter::Tab)?;
    dataset.require_columns(&[RSID, QUICKPUBMED])?;
    let urls: Vec<String> = dataset
        .into_records()
        .into_iter()
        .filter(|record| matches_rsid(record, rsid))
        .filter_map(|record| record.get(QUICKPUBMED).as_text())
        .map(|id| format!("{PUBMED_URL_PREFIX}{id}"))
        .collect();
    debug!(rsid, references = urls.len(), "collected PubMed references");
    Ok(urls.join("\n"))
}

fn matches_rsid(record: &Record, rsid: &str) -> bool {
    record.get(RSID).as_text().is_some_and(|value| value == rsid)
}
