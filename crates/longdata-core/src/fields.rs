//! Column names and canonical vocabularies of the longevity datasets.

use longdata_model::Vocabulary;

/// AnAge traits a column hint can resolve to, in tie-break order.
pub const ANAGE_FIELDS: [&str; 24] = [
    "Kingdom",
    "Phylum",
    "Class",
    "Order",
    "Family",
    "Genus",
    "Species",
    "Female maturity (days)",
    "Male maturity (days)",
    "Gestation/Incubation (days)",
    "Weaning (days)",
    "Litter/Clutch size",
    "Litters/Clutches per year",
    "Inter-litter/Interbirth interval",
    "Birth weight (g)",
    "Weaning weight (g)",
    "Adult weight (g)",
    "Growth rate (1/days)",
    "Maximum longevity (yrs)",
    "IMR (per yr)",
    "MRDT (yrs)",
    "Metabolic rate (W)",
    "Body mass (g)",
    "Temperature (K)",
];

pub const GENUS: &str = "Genus";
pub const SPECIES: &str = "Species";
pub const COMMON_NAME: &str = "Common name";
/// Derived as `Genus + " " + Species`.
pub const SCIENCE_NAME: &str = "Science name";

/// Identity fields a gene query is matched against.
pub const GENAGE_IDENTITY_FIELDS: [&str; 5] = [
    "Entrez Gene ID",
    "Gene Symbol",
    "Gene Name",
    "Unigene ID",
    "Ensembl ID",
];

/// Columns of a gene lookup result.
pub const GENAGE_OUTPUT_COLUMNS: [&str; 9] = [
    "Entrez Gene ID",
    "Gene Symbol",
    "Gene Name",
    "Unigene ID",
    "Ensembl ID",
    "Lifespan Effect",
    "Phenotype Description",
    "Longevity Influence",
    "Method",
];

pub const RSID: &str = "rsid";

/// Columns of an rsid lookup result.
pub const LONGEVITYMAP_OUTPUT_COLUMNS: [&str; 4] = [RSID, "allele", "zygosity", "weight"];

pub const QUICKPUBMED: &str = "quickpubmed";
pub const PUBMED_URL_PREFIX: &str = "https://pubmed.ncbi.nlm.nih.gov/";

pub fn anage_vocabulary() -> Vocabulary {
    Vocabulary::new(ANAGE_FIELDS).expect("AnAge vocabulary is non-empty")
}
