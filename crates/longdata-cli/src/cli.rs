//! CLI argument definitions for the longevity lookups.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "longdata",
    version,
    about = "Fuzzy lookups over the AnAge, GenAge and LongevityMap datasets",
    long_about = "Fuzzy lookups over the AnAge, GenAge and LongevityMap datasets.\n\n\
                  Results are printed as ' ; '-separated tables, header first, \
                  with missing values shown as 'unknown'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where the datasets live and how much of a result to print.
#[derive(Args, Debug, Default, Clone)]
pub struct LookupArgs {
    /// Folder holding the four dataset files (overrides config and LONGDATA_DATA_DIR).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// TOML config file (default: ./longdata.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Data rows printed per result.
    #[arg(
        long = "max-rows",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..),
        global = true
    )]
    pub max_rows: Option<u16>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up animals by name: "<animal name>;<field>".
    Animal {
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Animals with the minimum or maximum of a trait: "<field>;<min|max>".
    AnimalExtremum {
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Look up longevity genes by symbol, name or id.
    Gene {
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Allele weights of a LongevityMap variant.
    Rsid {
        #[arg(value_name = "RSID")]
        rsid: String,
    },

    /// PubMed links for a LongevityMap variant.
    References {
        #[arg(value_name = "RSID")]
        rsid: String,
    },

    /// Run any registered tool by name.
    Tool {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// List destinations and their tools.
    Tools,

    /// List the AnAge fields a hint can resolve to.
    Fields,

    /// Show how a field hint scores against the AnAge fields.
    Resolve {
        #[arg(value_name = "HINT")]
        hint: String,

        /// Print candidates as JSON.
        #[arg(long = "json")]
        json: bool,
    },
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
