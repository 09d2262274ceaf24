//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Parser, Subcommand, ValueEnum};
use izero::domain::Environment;
use std::path::PathBuf;

/// Stack id used when none is given.
pub const DEFAULT_STACK_ID: &str = "CdkBackendStack";

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "izero")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Deployment topology resolver for initzero projects")]
pub struct Cli {
    /// More log output on stderr (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only warnings and errors on stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write logs to a file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write the log file as JSON lines
    #[arg(long, global = true, requires = "log_dir")]
    pub log_json: bool,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite the deploy workflows under `.github/workflows`
    Init {
        /// Deployment config file (defaults to `izero.{toml,yaml,json}` when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Project root containing `.github/workflows`
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Only rewrite these environments (all three by default)
        #[arg(short, long = "env")]
        env: Vec<Environment>,

        /// Print the rewritten documents instead of writing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the names resolved for every environment
    Resolve {
        /// Deployment config file (defaults to `izero.{toml,yaml,json}` when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Describe the API stack from the current environment variables
    Synth {
        #[arg(long, default_value = DEFAULT_STACK_ID)]
        stack_id: String,

        /// Cached provisioning context (hosted zone ids) as JSON
        #[arg(long)]
        context: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
