use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// How cloud accounts map onto environments.
///
/// * `Single` - one account hosts every environment; the subdomain encodes the environment.
/// * `Multi` - one account (and hosted zone) per environment; the zone encodes the environment.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AccountMode {
    #[default]
    Single,
    Multi,
}

/// Deployment target. Each one has its own workflow document and trigger rule.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    Production,
    Development,
    Sandbox,
}

impl Environment {
    pub const ALL: [Self; 3] = [Self::Production, Self::Development, Self::Sandbox];

    /// File name of the deploy workflow for this environment.
    #[must_use]
    pub const fn workflow_file(self) -> &'static str {
        match self {
            Self::Production => "deploy-production.yml",
            Self::Development => "deploy-development.yml",
            Self::Sandbox => "deploy-sandbox.yml",
        }
    }
}

/// Whether an environment gets a custom domain (`Static`) or only the generated endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BuildMode {
    Ephemeral,
    Static,
}

impl BuildMode {
    #[must_use]
    pub const fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }
}

/// Network names derived for one environment.
///
/// Empty strings mean "not configured"; the web hostname may be the apex marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedNames {
    pub environment: Environment,
    pub api_hostname: String,
    pub web_hostname: String,
    pub api_hosted_zone: String,
    pub web_hosted_zone: String,
    pub build_mode: BuildMode,
}
