//! Description of the resources a stack asks the cloud to create.

use izero_domain::BuildMode;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::{AsRefStr, Display};

/// Output names, as exported by the stack.
pub mod outputs {
    pub const API_GATEWAY: &str = "ApiGateway";
    pub const CERTIFICATE_ARN: &str = "CertificateArn";
    pub const API_DOMAIN_NAME: &str = "ApiDomainName";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
pub enum ResourceKind {
    Function,
    RestApi,
    Certificate,
    DomainName,
    AliasRecord,
}

/// Packaged compute unit serving the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    pub code_asset: String,
    pub handler: String,
    pub runtime: String,
    pub memory_size_mb: u32,
    pub timeout_seconds: u32,
    pub log_retention_days: u32,
    pub environment: BTreeMap<String, String>,
}

/// What a resource is, with the properties that matter for it.
///
/// Fields holding another resource's id reference that resource within the same graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "properties", rename_all_fields = "camelCase")]
pub enum ResourceSpec {
    Function(FunctionSpec),
    RestApi { name: String, handler: String },
    Certificate { domain_name: String, arn: String, validation_zone_id: String },
    DomainName { name: String, domain_name: String, certificate: String, rest_api: String },
    AliasRecord { record_name: String, hosted_zone_id: String, target: String },
}

impl ResourceSpec {
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Function(_) => ResourceKind::Function,
            Self::RestApi { .. } => ResourceKind::RestApi,
            Self::Certificate { .. } => ResourceKind::Certificate,
            Self::DomainName { .. } => ResourceKind::DomainName,
            Self::AliasRecord { .. } => ResourceKind::AliasRecord,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: String,
    #[serde(flatten)]
    pub spec: ResourceSpec,
    pub tags: BTreeMap<String, String>,
}

impl Resource {
    pub fn new(id: impl Into<String>, spec: ResourceSpec) -> Self {
        Self { id: id.into(), spec, tags: BTreeMap::new() }
    }

    #[must_use]
    pub fn tagged(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.spec.kind()
    }

    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// A fully described stack. Either complete or not produced at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGraph {
    pub stack_id: String,
    pub build_mode: BuildMode,
    pub production: bool,
    /// Tags applied to the stack as a whole.
    pub tags: BTreeMap<String, String>,
    pub resources: Vec<Resource>,
    pub outputs: BTreeMap<String, String>,
}

impl ResourceGraph {
    /// Resources of the given kind, in creation order.
    pub fn of_kind(&self, kind: ResourceKind) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(move |r| r.kind() == kind)
    }

    #[must_use]
    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.of_kind(kind).next().is_some()
    }

    #[must_use]
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }
}

/// Placeholder for an attribute known only once the resource exists, e.g. `${ApiGateway.Url}`.
#[must_use]
pub fn attribute_ref(resource_id: &str, attribute: &str) -> String {
    format!("${{{resource_id}.{attribute}}}")
}
