use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `IZERO__DOMAIN__HOSTED_ZONE`.
pub const ENV_PREFIX: &str = "IZERO";
/// Base name of the config file looked up when no path is given (`izero.toml`, `izero.yaml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "izero";

/// Custom error type for config loading.
#[izero_derive::izero_error]
pub enum LoadError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration value from a file layered with `IZERO__` environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist. Without one, `izero.{toml,yaml,json}` in
///    the working directory is used when present, and skipped otherwise.
/// 2. **Environment Overrides**: variables prefixed with `IZERO__`, nested with double
///    underscores (`IZERO__TRIGGERS__SANDBOX_BRANCH` maps to `triggers.sandbox_branch`).
///
/// # Errors
/// Returns [`LoadError::Config`] if an explicit file is missing, a source cannot be parsed,
/// or the merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use izero_kernel::config::load_config;
/// use izero_kernel::domain::DeploymentConfig;
///
/// let cfg: DeploymentConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    load_config_with(path, None)
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<Map<String, String>>,
) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .ignore_empty(true)
                .source(vars),
        );

    if required {
        info!("Loading config from {}", file.display());
    } else {
        debug!("Looking for optional config '{}'", file.display());
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
