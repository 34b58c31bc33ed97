use anyhow::{Context, Result};
use tracing::{info_span, warn};

use longdata_cli::summary::{candidates_table, fields_table, tools_table};
use longdata_core::fields::anage_vocabulary;
use longdata_core::{LookupConfig, default_registry, get_references};
use longdata_map::FieldResolver;

/// Runs a registered tool and prints its table.
pub fn run_tool(name: &str, input: &str, config: &LookupConfig) -> Result<()> {
    let output = default_registry()
        .invoke(name, input, config)
        .with_context(|| format!("{name} failed"))?;
    println!("{output}");
    Ok(())
}

pub fn run_references(rsid: &str, config: &LookupConfig) -> Result<()> {
    let span = info_span!("references", rsid);
    let _guard = span.enter();
    let output = get_references(config, rsid).context("get_references failed")?;
    if output.is_empty() {
        warn!(rsid, "no references found");
    } else {
        println!("{output}");
    }
    Ok(())
}

pub fn run_tools() {
    println!("{}", tools_table(default_registry()));
}

pub fn run_fields() {
    println!("{}", fields_table(&anage_vocabulary()));
}

pub fn run_resolve(hint: &str, json: bool) -> Result<()> {
    let resolver = FieldResolver::new(anage_vocabulary());
    let candidates = resolver.candidates(hint);
    if json {
        let text = serde_json::to_string_pretty(&candidates).context("serialize candidates")?;
        println!("{text}");
    } else {
        println!("{}", candidates_table(&candidates));
    }
    Ok(())
}
