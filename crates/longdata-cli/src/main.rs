//! Longevity dataset lookup CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use longdata_cli::logging::{LogConfig, LogFormat, init_logging};
use longdata_cli::settings::lookup_config;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_fields, run_references, run_resolve, run_tool, run_tools};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let lookup = || {
        lookup_config(
            cli.lookup.data_dir.as_deref(),
            cli.lookup.config.as_deref(),
            cli.lookup.max_rows.map(usize::from),
        )
    };
    match &cli.command {
        Command::Animal { input } => run_tool("animal_information", input, &lookup()?),
        Command::AnimalExtremum { input } => {
            run_tool("animals_min_max_information", input, &lookup()?)
        }
        Command::Gene { input } => run_tool("gene_information", input, &lookup()?),
        Command::Rsid { rsid } => run_tool("rsid_information", rsid, &lookup()?),
        Command::References { rsid } => run_references(rsid, &lookup()?),
        Command::Tool { name, input } => run_tool(name, input, &lookup()?),
        Command::Tools => {
            run_tools();
            Ok(())
        }
        Command::Fields => {
            run_fields();
            Ok(())
        }
        Command::Resolve { hint, json } => run_resolve(hint, *json),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
