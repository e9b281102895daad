//! CLI parse: clap types for growi-config. No behavior; definitions only.

use crate::config::ValueType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// growi-config - Inspect resolved configuration from the store and environment
#[derive(Parser)]
#[command(name = "growi-config")]
#[command(about = "Resolve configuration from persisted rows and environment variables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (TOML, YAML or JSON)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Config store directory (overrides settings)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Default templates JSON file (overrides settings)
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and print the resolved configuration as JSON
    Show {
        /// Which result to print
        #[arg(long, value_enum, default_value_t = ShowSource::All)]
        source: ShowSource,
    },
    /// List the environment variable schema
    Schema {
        /// Only list variables of this type (NUMBER, STRING, BOOLEAN)
        #[arg(long = "type")]
        value_type: Option<ValueType>,
    },
    /// Store a JSON scalar value for a namespace/key
    Set {
        namespace: String,
        key: String,
        /// JSON-encoded scalar, e.g. '"text"', 42, true, null
        value: String,
    },
    /// Remove a stored namespace/key
    Unset { namespace: String, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowSource {
    /// Both results
    All,
    /// Database values merged with the default templates
    Db,
    /// Environment variable values
    Env,
}
