//! Synthesis-time variables, captured once at the process boundary.

use izero_domain::Environment;
use izero_domain::constants::{FUNCTION_PASSTHROUGH_VARS, anchors};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Immutable snapshot of the variables the stack reads. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackEnv {
    vars: BTreeMap<String, String>,
}

impl StackEnv {
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        Self { vars }
    }

    /// Reads the current process environment. Call this once, in `main`.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn hosted_zone(&self) -> Option<&str> {
        self.get(anchors::API_HOSTED_ZONE)
    }

    #[must_use]
    pub fn api_subdomain(&self) -> Option<&str> {
        self.get(anchors::API_SUBDOMAIN)
    }

    /// The deployment environment named by `PROJECT_ENV`, if it is one of the known ones.
    #[must_use]
    pub fn environment(&self) -> Option<Environment> {
        self.get(anchors::PROJECT_ENV).and_then(|v| Environment::from_str(v).ok())
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment() == Some(Environment::Production)
    }

    /// The variables forwarded to the compute unit, limited to those that are set.
    #[must_use]
    pub fn passthrough(&self) -> BTreeMap<String, String> {
        FUNCTION_PASSTHROUGH_VARS
            .iter()
            .filter_map(|&name| self.get(name).map(|v| (name.to_owned(), v.to_owned())))
            .collect()
    }
}
