//! Lookups against small fixture datasets written to a temp folder.

use std::fs;

use longdata_core::{
    LookupConfig, LookupError, animal_information, animals_min_max_information,
    default_registry, gene_information, get_references, rsid_information,
};
use longdata_ingest::DatasetError;
use longdata_map::MapError;
use tempfile::TempDir;

const ANAGE: &str = "\
HAGRID,Class,Genus,Species,Common name,Body mass (g),Temperature (K)
00001,Mammalia,Canis,familiaris,Dog,4500,311.5
00002,Amphibia,Rana,temporaria,Common frog,22.7,
00003,Mammalia,Mus,musculus,House mouse,20.5,310.1
00004,Mammalia,Canis,,Wild dog,,
";

const GENAGE: &str = "\
Organism;Entrez Gene ID;Gene Symbol;Gene Name;Unigene ID;Ensembl ID;Lifespan Effect;Phenotype Description;Longevity Influence;Method
Caenorhabditis elegans;175410;daf-2;Insulin-like receptor;;WBGene00000898;Increase;Long-lived;Pro-Longevity;Mutation
Caenorhabditis elegans;172982;daf-16;Forkhead box protein O;;WBGene00000912;Decrease;Short-lived;Anti-Longevity;RNAi
";

const WEIGHTS: &str = "\
rsid\tallele\tzygosity\tweight\tgene
rs7412\tT\thom\t1.0\tAPOE
rs429358\tC\thom\t-1.0\tAPOE
rs7412\tC\thet\t-0.5\tAPOE
";

const VARIANTS: &str = "\
rsid\tquickpubmed\tgene
rs7412\t17000001\tAPOE
rs7412\t\tAPOE
rs429358\t19000003\tAPOE
rs7412\t22000002\tAPOE
";

fn fixture() -> (TempDir, LookupConfig) {
    let dir = TempDir::new().expect("temp dir");
    for (name, contents) in [
        ("anage_data.csv", ANAGE),
        ("genage_models.csv", GENAGE),
        ("longevitymap_weights.tsv", WEIGHTS),
        ("variants.tsv", VARIANTS),
    ] {
        fs::write(dir.path().join(name), contents).expect("write fixture");
    }
    let config = LookupConfig::from_folder(dir.path());
    (dir, config)
}

#[test]
fn animal_lookup_puts_closest_name_first() {
    let (_dir, config) = fixture();
    let out = animal_information(&config, "dog;body mass").expect("lookup");
    let lines: Vec<&str> = out.split('\n').collect();

    assert_eq!(lines[0], "Science name ; Common name ; Body mass (g)");
    assert_eq!(lines[1], "Canis familiaris ; Dog ; 4500");
    assert_eq!(lines.len(), 5);
    assert!(lines.contains(&"unknown ; Wild dog ; unknown"));
}

#[test]
fn animal_lookup_respects_row_cap() {
    let (_dir, config) = fixture();
    let out = animal_information(&config.with_max_rows(1), "dog;temperature").expect("lookup");
    assert_eq!(
        out,
        "Science name ; Common name ; Temperature (K)\nCanis familiaris ; Dog ; 311.5"
    );
}

#[test]
fn animal_lookup_requires_field_part() {
    let (_dir, config) = fixture();
    let err = animal_information(&config, "dog").unwrap_err();
    assert!(matches!(err, LookupError::ToolInput { .. }));
}

#[test]
fn min_lookup_returns_smallest_animal() {
    let (_dir, config) = fixture();
    let out = animals_min_max_information(&config, "body mass;min").expect("lookup");
    insta::assert_snapshot!(out, @r"
    Science name ; Common name ; Body mass (g)
    Mus musculus ; House mouse ; 20.5
    ");
}

#[test]
fn max_lookup_skips_missing_values() {
    let (_dir, config) = fixture();
    let out = animals_min_max_information(&config, "Temperature ; MAX").expect("lookup");
    assert_eq!(
        out,
        "Science name ; Common name ; Temperature (K)\nCanis familiaris ; Dog ; 311.5"
    );
}

#[test]
fn extremum_rejects_unknown_operation() {
    let (_dir, config) = fixture();
    let err = animals_min_max_information(&config, "body mass;avg").unwrap_err();
    assert!(matches!(
        err,
        LookupError::Map(MapError::InvalidOperation(op)) if op == "avg"
    ));
}

#[test]
fn extremum_rejects_text_column() {
    let (_dir, config) = fixture();
    let err = animals_min_max_information(&config, "class;max").unwrap_err();
    assert!(matches!(
        err,
        LookupError::Map(MapError::TypeConversion { ref column, .. }) if column == "Class"
    ));
}

#[test]
fn gene_lookup_ranks_by_any_identifier() {
    let (_dir, config) = fixture();
    let out = gene_information(&config, "daf-2").expect("lookup");
    insta::assert_snapshot!(out, @r"
    Entrez Gene ID ; Gene Symbol ; Gene Name ; Unigene ID ; Ensembl ID ; Lifespan Effect ; Phenotype Description ; Longevity Influence ; Method
    175410 ; daf-2 ; Insulin-like receptor ; unknown ; WBGene00000898 ; Increase ; Long-lived ; Pro-Longevity ; Mutation
    172982 ; daf-16 ; Forkhead box protein O ; unknown ; WBGene00000912 ; Decrease ; Short-lived ; Anti-Longevity ; RNAi
    ");
}

#[test]
fn rsid_lookup_filters_exact_matches_in_file_order() {
    let (_dir, config) = fixture();
    let out = rsid_information(&config, " rs7412 ").expect("lookup");
    insta::assert_snapshot!(out, @r"
    rsid ; allele ; zygosity ; weight
    rs7412 ; T ; hom ; 1.0
    rs7412 ; C ; het ; -0.5
    ");
}

#[test]
fn rsid_lookup_without_matches_is_header_only() {
    let (_dir, config) = fixture();
    let out = rsid_information(&config, "rs1").expect("lookup");
    assert_eq!(out, "rsid ; allele ; zygosity ; weight");
}

#[test]
fn references_skip_rows_without_pubmed_id() {
    let (_dir, config) = fixture();
    let out = get_references(&config, "rs7412").expect("references");
    assert_eq!(
        out,
        "https://pubmed.ncbi.nlm.nih.gov/17000001\nhttps://pubmed.ncbi.nlm.nih.gov/22000002"
    );
    assert_eq!(get_references(&config, "rs0").expect("references"), "");
}

#[test]
fn registry_dispatches_by_tool_name() {
    let (_dir, config) = fixture();
    let out = default_registry()
        .invoke("rsid_information", "rs429358", &config)
        .expect("invoke");
    assert_eq!(out, "rsid ; allele ; zygosity ; weight\nrs429358 ; C ; hom ; -1.0");
}

#[test]
fn missing_dataset_is_reported_with_path() {
    let dir = TempDir::new().expect("temp dir");
    let config = LookupConfig::from_folder(dir.path());
    let err = gene_information(&config, "daf-2").unwrap_err();
    match err {
        LookupError::Dataset(DatasetError::NotFound { path }) => {
            assert!(path.ends_with("genage_models.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_required_column_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("variants.tsv"), "rsid\tgene\nrs7412\tAPOE\n").expect("write");
    let config = LookupConfig::from_folder(dir.path());
    let err = get_references(&config, "rs7412").unwrap_err();
    assert!(matches!(
        err,
        LookupError::Dataset(DatasetError::MissingColumn { ref column, .. }) if column == "quickpubmed"
    ));
}

fn config_with(name: &str, contents: &str) -> (TempDir, LookupConfig) {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(name), contents).expect("write fixture");
    let config = LookupConfig::from_folder(dir.path());
    (dir, config)
}

fn missing_column(err: &LookupError) -> Option<&str> {
    match err {
        LookupError::Dataset(DatasetError::MissingColumn { column, .. }) => Some(column.as_str()),
        _ => None,
    }
}

#[test]
fn resolved_trait_absent_from_file_is_reported() {
    let (_dir, config) = config_with(
        "anage_data.csv",
        "Genus,Species,Common name,Body mass (g)\nCanis,familiaris,Dog,4500\n",
    );

    let err = animal_information(&config, "dog;temperature").unwrap_err();
    assert_eq!(missing_column(&err), Some("Temperature (K)"));

    let err = animals_min_max_information(&config, "temperature;max").unwrap_err();
    assert_eq!(missing_column(&err), Some("Temperature (K)"));
}

#[test]
fn gene_output_column_absent_from_file_is_reported() {
    let (_dir, config) = config_with(
        "genage_models.csv",
        "Entrez Gene ID;Gene Symbol;Gene Name;Unigene ID;Ensembl ID\n175410;daf-2;Insulin-like receptor;;WBGene00000898\n",
    );
    let err = gene_information(&config, "daf-2").unwrap_err();
    assert_eq!(missing_column(&err), Some("Lifespan Effect"));
}

#[test]
fn rsid_output_column_absent_from_file_is_reported() {
    let (_dir, config) = config_with(
        "longevitymap_weights.tsv",
        "rsid\tallele\tweight\nrs7412\tT\t1.0\n",
    );
    let err = rsid_information(&config, "rs7412").unwrap_err();
    assert_eq!(missing_column(&err), Some("zygosity"));
}

#[test]
fn resolver_ranker_and_serializer_compose() {
    use longdata_map::{FieldResolver, RecordRanker};
    use longdata_model::{CellValue, Record, Vocabulary};
    use longdata_output::TableSerializer;

    let vocabulary = Vocabulary::new(["Body mass (g)", "Temperature (K)"]).expect("vocabulary");
    let column = FieldResolver::new(vocabulary).resolve("body mass").to_string();
    assert_eq!(column, "Body mass (g)");

    let records = vec![
        Record::from_pairs([
            ("Common name", CellValue::from("Frog")),
            ("Body mass (g)", CellValue::from(22.7)),
        ]),
        Record::from_pairs([
            ("Common name", CellValue::from("Dog")),
            ("Body mass (g)", CellValue::from(4500.0)),
        ]),
    ];
    let ranked = RecordRanker::new(["Common name"]).rank(records, "dog");
    let rows: Vec<Record> = ranked.into_iter().map(|scored| scored.record).collect();

    let out = TableSerializer::new(1)
        .serialize(&["Common name", column.as_str()], &rows)
        .expect("serialize");
    assert_eq!(out, "Common name ; Body mass (g)\nDog ; 4500");
}
