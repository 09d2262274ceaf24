use anyhow::{Context, Result};
use izero::domain::DeploymentConfig;
use izero::kernel::config::load_config;
use std::path::Path;
use tracing::debug;

/// Loads the deployment config and validates it before anything else runs.
///
/// # Errors
/// Returns an error if the config cannot be loaded or fails validation.
pub fn load_validated(path: Option<&Path>) -> Result<DeploymentConfig> {
    let config: DeploymentConfig =
        load_config(path).context("Critical: Configuration is malformed")?;

    izero::topology::validate_config(&config).context("Critical: Configuration is invalid")?;
    debug!(project = %config.project.key, account_mode = %config.account_mode, "Config loaded");

    Ok(config)
}
