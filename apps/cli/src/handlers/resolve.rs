use crate::models::args::OutputFormat;
use crate::services::config::load_validated;
use crate::services::render::render_names_table;
use anyhow::Result;
use izero::domain::Environment;
use std::path::Path;

/// Prints the names resolved for production, development and sandbox.
///
/// # Errors
/// Returns an error if the config cannot be loaded or is invalid.
pub fn run(config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_validated(config)?;
    let names: Vec<_> =
        Environment::ALL.iter().map(|&env| izero::topology::resolve(&config, env)).collect();

    match format {
        OutputFormat::Table => render_names_table(&names),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
    }

    Ok(())
}
