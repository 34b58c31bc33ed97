//! Resolution of the lookup configuration from CLI flags and config files.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use longdata_core::config::CONFIG_FILE_NAME;
use longdata_core::{DataPaths, LookupConfig};

/// Builds the lookup configuration.
///
/// Precedence, highest first: `data_dir`/`max_rows` flags, the config file
/// (`config_path`, or `./longdata.toml` when present), then defaults.
/// A `data_dir` flag replaces every dataset path, including per-file
/// overrides from the config file.
pub fn lookup_config(
    data_dir: Option<&Path>,
    config_path: Option<&Path>,
    max_rows: Option<usize>,
) -> Result<LookupConfig> {
    let mut config = match config_path {
        Some(path) => LookupConfig::from_file(path).context("load config")?,
        None => {
            let local = Path::new(CONFIG_FILE_NAME);
            if local.is_file() {
                LookupConfig::from_file(local).context("load config")?
            } else {
                LookupConfig::default()
            }
        }
    };
    if let Some(dir) = data_dir {
        config = config.with_data(DataPaths::from_folder(dir));
    }
    if let Some(max_rows) = max_rows {
        config = config.with_max_rows(max_rows);
    }
    debug!(
        anage = %config.data.anage.display(),
        genage = %config.data.genage.display(),
        max_rows = config.max_rows,
        "resolved lookup config"
    );
    Ok(config)
}
