#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{init, resolve, synth};
use crate::models::args::{Cli, Commands};

use anyhow::Result;
use clap::Parser;
use izero_logger::Logger;
use std::io::IsTerminal;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(Logger::level_for(cli.verbose, cli.quiet))
        .ansi(std::io::stderr().is_terminal());

    let _log = match &cli.log_dir {
        Some(dir) if cli.log_json => logger.path(dir).json().init()?,
        Some(dir) => logger.path(dir).init()?,
        None => logger.init()?,
    };

    match cli.command {
        Commands::Init { config, root, env, dry_run } => {
            init::run(config.as_deref(), &root, &env, dry_run)?;
        },
        Commands::Resolve { config, format } => resolve::run(config.as_deref(), format)?,
        Commands::Synth { stack_id, context } => synth::run(&stack_id, context.as_deref())?,
    }

    Ok(())
}
