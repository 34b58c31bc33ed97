//! Dataset locations and lookup options.
//!
//! Precedence, highest first: explicit setters (CLI flags), the TOML config
//! file, then defaults. The default data folder comes from
//! `LONGDATA_DATA_DIR`, falling back to `./data`.
//!
//! ```toml
//! data_dir = "datasets"
//! max_rows = 5
//!
//! [files]
//! variants = "/shared/longevitymap/variants.tsv"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use longdata_output::DEFAULT_MAX_ROWS;

pub const DATA_DIR_ENV_VAR: &str = "LONGDATA_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const CONFIG_FILE_NAME: &str = "longdata.toml";

const ANAGE_FILE: &str = "anage_data.csv";
const GENAGE_FILE: &str = "genage_models.csv";
const LONGEVITYMAP_WEIGHTS_FILE: &str = "longevitymap_weights.tsv";
const VARIANTS_FILE: &str = "variants.tsv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// `LONGDATA_DATA_DIR` when set and non-blank, otherwise `./data`.
pub fn default_data_dir() -> PathBuf {
    data_dir_from(std::env::var(DATA_DIR_ENV_VAR).ok())
}

fn data_dir_from(value: Option<String>) -> PathBuf {
    match value {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

/// Locations of the four dataset files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    /// AnAge animal traits, comma-separated.
    pub anage: PathBuf,
    /// GenAge model organism genes, semicolon-separated.
    pub genage: PathBuf,
    /// LongevityMap allele weights, tab-separated.
    pub longevitymap_weights: PathBuf,
    /// LongevityMap variants with PubMed ids, tab-separated.
    pub variants: PathBuf,
}

impl DataPaths {
    /// Standard file names inside one data folder.
    pub fn from_folder(folder: &Path) -> Self {
        Self {
            anage: folder.join(ANAGE_FILE),
            genage: folder.join(GENAGE_FILE),
            longevitymap_weights: folder.join(LONGEVITYMAP_WEIGHTS_FILE),
            variants: folder.join(VARIANTS_FILE),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::from_folder(&default_data_dir())
    }
}

/// Everything a lookup needs besides its input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub data: DataPaths,
    /// Data rows kept in a serialized result.
    pub max_rows: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl LookupConfig {
    pub fn from_folder(folder: &Path) -> Self {
        Self {
            data: DataPaths::from_folder(folder),
            ..Self::default()
        }
    }

    /// Loads a TOML config file on top of the defaults.
    ///
    /// Relative paths in the file are resolved against the file's folder.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = ConfigFile::load(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(file.apply(base, Self::default()))
    }

    pub fn with_data(mut self, data: DataPaths) -> Self {
        self.data = data;
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
}

/// On-disk shape of `longdata.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub max_rows: Option<usize>,
    #[serde(default)]
    pub files: FileOverrides,
}

/// Per-dataset path overrides; each wins over `data_dir`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileOverrides {
    #[serde(default)]
    pub anage: Option<PathBuf>,
    #[serde(default)]
    pub genage: Option<PathBuf>,
    #[serde(default)]
    pub longevitymap_weights: Option<PathBuf>,
    #[serde(default)]
    pub variants: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let file: Self = toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if file.max_rows == Some(0) {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: "max_rows must be at least 1".to_string(),
            });
        }
        Ok(file)
    }

    /// Layers this file over `config`, resolving relative paths against `base`.
    pub fn apply(&self, base: &Path, mut config: LookupConfig) -> LookupConfig {
        if let Some(dir) = &self.data_dir {
            config.data = DataPaths::from_folder(&resolve(base, dir));
        }
        let overrides = [
            (&self.files.anage, &mut config.data.anage),
            (&self.files.genage, &mut config.data.genage),
            (
                &self.files.longevitymap_weights,
                &mut config.data.longevitymap_weights,
            ),
            (&self.files.variants, &mut config.data.variants),
        ];
        for (value, slot) in overrides {
            if let Some(path) = value {
                *slot = resolve(base, path);
            }
        }
        if let Some(max_rows) = self.max_rows {
            config.max_rows = max_rows;
        }
        config
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_env_value_wins_when_set() {
        assert_eq!(
            data_dir_from(Some("/srv/longdata".to_string())),
            Path::new("/srv/longdata")
        );
    }

    #[test]
    fn data_dir_falls_back_when_unset_or_blank() {
        assert_eq!(data_dir_from(None), Path::new(DEFAULT_DATA_DIR));
        assert_eq!(data_dir_from(Some("  ".to_string())), Path::new(DEFAULT_DATA_DIR));
    }

    #[test]
    fn folder_uses_standard_file_names() {
        let paths = DataPaths::from_folder(Path::new("/srv/data"));
        assert_eq!(paths.anage, Path::new("/srv/data/anage_data.csv"));
        assert_eq!(paths.genage, Path::new("/srv/data/genage_models.csv"));
        assert_eq!(
            paths.longevitymap_weights,
            Path::new("/srv/data/longevitymap_weights.tsv")
        );
        assert_eq!(paths.variants, Path::new("/srv/data/variants.tsv"));
    }

    #[test]
    fn file_values_resolve_relative_to_config_folder() {
        let file = ConfigFile::parse(
            Path::new("/etc/longdata/longdata.toml"),
            r#"
                data_dir = "datasets"
                max_rows = 3

                [files]
                variants = "/shared/variants.tsv"
            "#,
        )
        .unwrap();
        let config = file.apply(Path::new("/etc/longdata"), LookupConfig::default());

        assert_eq!(config.max_rows, 3);
        assert_eq!(
            config.data.anage,
            Path::new("/etc/longdata/datasets/anage_data.csv")
        );
        assert_eq!(config.data.variants, Path::new("/shared/variants.tsv"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ConfigFile::parse(Path::new("longdata.toml"), "rows = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn zero_max_rows_is_invalid() {
        let err = ConfigFile::parse(Path::new("longdata.toml"), "max_rows = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
