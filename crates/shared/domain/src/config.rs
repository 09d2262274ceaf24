use crate::constants::APEX_MARKER;
use crate::topology::AccountMode;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// Resolved answers describing one project deployment.
#[derive(Default, Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct DeploymentConfigInner {
    #[builder(default)]
    pub project: ProjectConfig,
    #[builder(default)]
    pub domain: DomainConfig,
    #[builder(default)]
    pub account_mode: AccountMode,
    #[builder(default)]
    pub triggers: TriggerConfig,
}

/// Immutable, Arc-wrapped config shared by every consumer.
///
/// Read-only after construction: no `DerefMut`. Serialized as the inner value so loaders
/// see plain fields rather than a buffered map.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(from = "DeploymentConfigInner", into = "DeploymentConfigInner")]
pub struct DeploymentConfig {
    inner: Arc<DeploymentConfigInner>,
}

impl Deref for DeploymentConfig {
    type Target = DeploymentConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<DeploymentConfigInner> for DeploymentConfig {
    fn from(inner: DeploymentConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl From<DeploymentConfig> for DeploymentConfigInner {
    fn from(config: DeploymentConfig) -> Self {
        Arc::unwrap_or_clone(config.inner)
    }
}

/// Project identity and ownership metadata.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct ProjectConfig {
    #[builder(default = "initzero-project".to_owned(), setter(into))]
    pub key: String,
    #[builder(default = "none".to_owned(), setter(into))]
    pub sponsor: String,
    #[builder(default = "none".to_owned(), setter(into))]
    pub service: String,
    #[builder(default = "development".to_owned(), setter(into))]
    pub team: String,
    #[builder(default = "none".to_owned(), setter(into))]
    pub email: String,
}

/// Hosted zone and subdomain labels.
///
/// `hosted_zone` and `api_subdomain` travel together: both set means a custom domain.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct DomainConfig {
    #[builder(default, setter(into, strip_option))]
    pub hosted_zone: Option<String>,
    /// `@` (or `root`) serves the web app at the zone apex.
    #[builder(default = APEX_MARKER.to_owned(), setter(into))]
    pub web_subdomain: String,
    #[builder(default, setter(into, strip_option))]
    pub api_subdomain: Option<String>,
    #[builder(default = "dev".to_owned(), setter(into))]
    pub development_subdomain: String,
    #[builder(default = "sandbox".to_owned(), setter(into))]
    pub sandbox_subdomain: String,
}

/// CI trigger patterns per environment.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct TriggerConfig {
    #[builder(default = "main".to_owned(), setter(into))]
    pub development_branch: String,
    #[builder(default = "v1.**".to_owned(), setter(into))]
    pub production_tag: String,
    #[builder(default = "feat/*".to_owned(), setter(into))]
    pub sandbox_branch: String,
    #[builder(default = true)]
    pub sandbox_follows_development: bool,
}

// --- Default ---

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
