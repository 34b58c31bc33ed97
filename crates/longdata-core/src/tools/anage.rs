//! AnAge animal life-history lookups.

use tracing::debug;

use longdata_ingest::{Delimiter, read_dataset};
use longdata_map::{Extremum, FieldResolver, RecordRanker, filter_extremum};
use longdata_model::{CellValue, Record};
use longdata_output::TableSerializer;

use crate::fields::{COMMON_NAME, GENUS, SCIENCE_NAME, SPECIES, anage_vocabulary};
use crate::input::split_pair;
use crate::tools::{Destination, LookupTool};
use crate::{LookupConfig, LookupError};

const ANIMAL_INFORMATION_DESCRIPTION: &str = "\
You should use this tool for getting information about animals. It returns a table where rows \
are separated with a new line character and columns with \" ; \". The table contains animals \
whose names are similar to the query, but only one of them is the animal you need. The first row \
is the header with fields \"Science name\", \"Common name\" and the field from the input text. \
Input should be a string with two parts separated by \";\": the first part is the animal name, \
common name or latin name (Genus Species), the second part is the column of interest. For \
example input \"dog;body mass\" queries animals whose name contains dog with the additional field \
\"Body mass (g)\". Fields that can be queried: Kingdom, Phylum, Class, Order, Family, Genus, \
Species, Female maturity, Male maturity, Gestation/Incubation, Weaning, Litter/Clutch size, \
Litters/Clutches, Inter-litter/Interbirth interval, Birth weight, Weaning weight, Adult weight, \
Growth rate, Maximum longevity, Infant mortality rate IMR, Mortality Rate Doubling Time MRDT, \
Metabolic rate, Body mass, Temperature. Missing values are shown as \"unknown\". If there is no \
such animal in the table say it is an unknown animal.";

const ANIMALS_MIN_MAX_DESCRIPTION: &str = "\
You should use this tool for getting the minimum or maximum value of an animal feature among all \
animals. Use it only if you do NOT know the animal name. It returns a table with Science name, \
Common name and the field from the input, holding the animals where that field reaches the \
requested extremum. Input should be a string with two parts separated by \";\": the first part is \
the column name, the second is the operation, 'min' for minimum or 'max' for maximum. For \
example input \"Temperature;min\" returns the animal with the lowest temperature. Fields that \
can be queried: Female maturity, Male maturity, Gestation/Incubation, Weaning, Litter/Clutch \
size, Litters/Clutches, Inter-litter/Interbirth interval, Birth weight, Weaning weight, Adult \
weight, Growth rate, Maximum longevity, Infant mortality rate IMR, Mortality Rate Doubling Time \
MRDT, Metabolic rate, Body mass, Temperature.";

/// Looks up animals by name, input `"<animal name>;<field hint>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalInformation;

impl LookupTool for AnimalInformation {
    fn name(&self) -> &'static str {
        "animal_information"
    }

    fn destination(&self) -> Destination {
        Destination::Anage
    }

    fn description(&self) -> &'static str {
        ANIMAL_INFORMATION_DESCRIPTION
    }

    fn run(&self, input: &str, config: &LookupConfig) -> Result<String, LookupError> {
        animal_information(config, input)
    }
}

/// Finds the animals holding a trait's min or max, input `"<field hint>;<min|max>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalsMinMaxInformation;

impl LookupTool for AnimalsMinMaxInformation {
    fn name(&self) -> &'static str {
        "animals_min_max_information"
    }

    fn destination(&self) -> Destination {
        Destination::Anage
    }

    fn description(&self) -> &'static str {
        ANIMALS_MIN_MAX_DESCRIPTION
    }

    fn run(&self, input: &str, config: &LookupConfig) -> Result<String, LookupError> {
        animals_min_max_information(config, input)
    }
}

/// Ranks AnAge animals by name similarity and reports one resolved trait.
pub fn animal_information(config: &LookupConfig, input: &str) -> Result<String, LookupError> {
    let (animal, hint) = split_pair(input, "animal name", "field")?;
    let resolver = FieldResolver::new(anage_vocabulary());
    let column = resolver.resolve(hint);

    let records = load_animals(config, column)?;
    let ranked = RecordRanker::new([SCIENCE_NAME, COMMON_NAME]).rank(records, animal);
    let rows: Vec<Record> = ranked.into_iter().map(|scored| scored.record).collect();

    let columns = [SCIENCE_NAME, COMMON_NAME, column];
    Ok(TableSerializer::new(config.max_rows).serialize(&columns, &rows)?)
}

/// Reports the animals whose resolved trait equals the column min or max.
pub fn animals_min_max_information(
    config: &LookupConfig,
    input: &str,
) -> Result<String, LookupError> {
    let (hint, operation) = split_pair(input, "field", "operation")?;
    let extremum: Extremum = operation.parse()?;
    let resolver = FieldResolver::new(anage_vocabulary());
    let column = resolver.resolve(hint);

    let records = load_animals(config, column)?;
    let rows = filter_extremum(records, column, extremum)?;

    let columns = [SCIENCE_NAME, COMMON_NAME, column];
    Ok(TableSerializer::new(config.max_rows).serialize(&columns, &rows)?)
}

/// Loads AnAge with the derived science name; `column` must be in the file.
fn load_animals(config: &LookupConfig, column: &str) -> Result<Vec<Record>, LookupError> {
    let dataset = read_dataset(&config.data.anage, Delimiter::Comma)?;
    dataset.require_columns(&[GENUS, SPECIES, COMMON_NAME, column])?;
    let mut records = dataset.into_records();
    for record in &mut records {
        let science_name = science_name(record);
        record.insert(SCIENCE_NAME, science_name);
    }
    debug!(animals = records.len(), "loaded AnAge records");
    Ok(records)
}

/// `Genus + " " + Species`; missing when either part is missing.
fn science_name(record: &Record) -> CellValue {
    match (record.get(GENUS).as_text(), record.get(SPECIES).as_text()) {
        (Some(genus), Some(species)) => CellValue::Text(format!("{genus} {species}")),
        _ => CellValue::Missing,
    }
}
