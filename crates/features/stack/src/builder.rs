//! # Stack Builder
//!
//! One construction pass over a [`StackEnv`]:
//!
//! 1. Validate the hosted zone / subdomain pair; fail before anything is described.
//! 2. Derive the build mode from their presence alone.
//! 3. Always describe the compute unit and the API gateway in front of it.
//! 4. In `static` mode, look up the zone, request a certificate, map the custom domain and
//!    point an alias record at it.
//! 5. Tag the stack with exactly one build-type marker.
//! 6. Export the invoke URL, plus the certificate and domain name when static.
//!
//! The graph is assembled locally and returned only once complete, so a failed lookup
//! leaves nothing behind.

use crate::env::StackEnv;
use crate::error::StackError;
use crate::graph::{FunctionSpec, Resource, ResourceGraph, ResourceSpec, attribute_ref, outputs};
use crate::provisioner::Provisioner;
use izero_domain::BuildMode;
use izero_domain::constants::{anchors, roles, tags};
use izero_topology::{ConfigErrorExt, derive_build_mode, merge_domain, validate};
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const FUNCTION_ID: &str = "FunctionExpress";
pub const CERTIFICATE_ID: &str = "Certificate";
pub const ALIAS_RECORD_ID: &str = "AliasRecord";

/// Fixed settings of the packaged API handler.
pub mod function {
    pub const CODE_ASSET: &str = "../express";
    pub const HANDLER: &str = "index.default";
    pub const RUNTIME: &str = "nodejs18.x";
    pub const MEMORY_SIZE_MB: u32 = 1024;
    pub const TIMEOUT_SECONDS: u32 = 30;
    pub const LOG_RETENTION_DAYS: u32 = 90;
}

/// Names of the per-deployment resources: `{env}-{key}-{Kind}-{nonce}`.
///
/// Unset parts are left out. When neither `PROJECT_ENV` nor `PROJECT_KEY` is set, the stack
/// id takes their place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub api_gateway: String,
    pub certificate: String,
    pub domain_name: String,
}

impl ResourceNames {
    #[must_use]
    pub fn new(stack_id: &str, env: &StackEnv) -> Self {
        let mut prefix: Vec<&str> =
            [anchors::PROJECT_ENV, anchors::PROJECT_KEY].iter().filter_map(|&n| env.get(n)).collect();
        if prefix.is_empty() {
            prefix.push(stack_id);
        }
        let prefix = prefix.join("-");

        let name = |kind: &str| match env.get(anchors::PROJECT_NONCE) {
            Some(nonce) => format!("{prefix}-{kind}-{nonce}"),
            None => format!("{prefix}-{kind}"),
        };
        Self {
            api_gateway: name("ApiGateway"),
            certificate: name("Certificate"),
            domain_name: name("ApiDomainName"),
        }
    }
}

/// Custom host the API is served on in `static` mode.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Host {
    name: String,
    zone: String,
}

/// A validated stack, ready to be described against a [`Provisioner`].
#[derive(Debug, Clone)]
pub struct StackBuilder {
    stack_id: String,
    build_mode: BuildMode,
    production: bool,
    names: ResourceNames,
    host: Option<Host>,
    function_env: BTreeMap<String, String>,
}

impl StackBuilder {
    /// Runs steps 1 and 2.
    ///
    /// # Errors
    /// Returns [`StackError::Config`] when the zone / subdomain pair is malformed or one-sided.
    pub fn new(stack_id: impl Into<String>, env: &StackEnv) -> Result<Self, StackError> {
        let stack_id = stack_id.into();
        let zone = env.hosted_zone();
        let subdomain = env.api_subdomain();
        validate(zone, subdomain)
            .context(format!("{} / {}", anchors::API_HOSTED_ZONE, anchors::API_SUBDOMAIN))?;

        let build_mode = derive_build_mode(zone, subdomain);
        let host = match (build_mode, zone, subdomain) {
            (BuildMode::Static, Some(zone), Some(subdomain)) => {
                Some(Host { name: merge_domain(subdomain, zone), zone: zone.to_owned() })
            },
            _ => None,
        };

        Ok(Self {
            names: ResourceNames::new(&stack_id, env),
            stack_id,
            build_mode,
            production: env.is_production(),
            host,
            function_env: env.passthrough(),
        })
    }

    #[must_use]
    pub const fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    #[must_use]
    pub const fn names(&self) -> &ResourceNames {
        &self.names
    }

    /// Runs steps 3 to 6. Provisioner errors propagate as [`StackError::Provisioning`].
    ///
    /// # Errors
    /// Any error from `provisioner`; no graph is returned in that case.
    pub fn build<P: Provisioner + ?Sized>(
        self,
        provisioner: &P,
    ) -> Result<ResourceGraph, StackError> {
        let mut resources = Vec::new();
        let mut exports = BTreeMap::new();

        resources.push(
            Resource::new(FUNCTION_ID, ResourceSpec::Function(self.function_spec()))
                .tagged(tags::ROLE, roles::API),
        );

        let custom_domain = match &self.host {
            Some(host) => {
                let zone = provisioner.lookup_hosted_zone(&host.zone)?;
                let certificate = provisioner.issue_certificate(&host.name, &zone)?;
                debug!(host = %host.name, zone_id = %zone.id, "Certificate requested");

                exports.insert(outputs::CERTIFICATE_ARN.to_owned(), certificate.arn.clone());
                resources.push(
                    Resource::new(CERTIFICATE_ID, ResourceSpec::Certificate {
                        domain_name: host.name.clone(),
                        arn: certificate.arn.clone(),
                        validation_zone_id: zone.id.clone(),
                    })
                    .tagged(tags::ROLE, roles::HOSTING),
                );
                Some((host, zone, certificate))
            },
            None => None,
        };

        let api_id = self.names.api_gateway.clone();
        resources.push(
            Resource::new(&api_id, ResourceSpec::RestApi {
                name: api_id.clone(),
                handler: FUNCTION_ID.to_owned(),
            })
            .tagged(tags::ROLE, roles::API),
        );
        exports.insert(outputs::API_GATEWAY.to_owned(), attribute_ref(&api_id, "Url"));

        if let Some((host, zone, certificate)) = custom_domain {
            let domain_id = self.names.domain_name.clone();
            resources.push(
                Resource::new(&domain_id, ResourceSpec::DomainName {
                    name: domain_id.clone(),
                    domain_name: host.name.clone(),
                    certificate: certificate.arn,
                    rest_api: api_id,
                })
                .tagged(tags::ROLE, roles::API),
            );
            exports.insert(outputs::API_DOMAIN_NAME.to_owned(), host.name.clone());

            resources.push(
                Resource::new(ALIAS_RECORD_ID, ResourceSpec::AliasRecord {
                    record_name: host.name.clone(),
                    hosted_zone_id: zone.id,
                    target: domain_id,
                })
                .tagged(tags::ROLE, roles::NETWORKING),
            );
        }

        let stack_tags =
            BTreeMap::from([(tags::BUILD_TYPE.to_owned(), self.build_mode.to_string())]);

        info!(
            stack = %self.stack_id,
            build_mode = %self.build_mode,
            resources = resources.len(),
            "Stack synthesized"
        );

        Ok(ResourceGraph {
            stack_id: self.stack_id,
            build_mode: self.build_mode,
            production: self.production,
            tags: stack_tags,
            resources,
            outputs: exports,
        })
    }

    fn function_spec(&self) -> FunctionSpec {
        FunctionSpec {
            code_asset: function::CODE_ASSET.to_owned(),
            handler: function::HANDLER.to_owned(),
            runtime: function::RUNTIME.to_owned(),
            memory_size_mb: function::MEMORY_SIZE_MB,
            timeout_seconds: function::TIMEOUT_SECONDS,
            log_retention_days: function::LOG_RETENTION_DAYS,
            environment: self.function_env.clone(),
        }
    }
}

/// Validates `env` and describes the whole stack in one call.
///
/// # Errors
/// See [`StackBuilder::new`] and [`StackBuilder::build`].
pub fn synthesize<P: Provisioner + ?Sized>(
    stack_id: &str,
    env: &StackEnv,
    provisioner: &P,
) -> Result<ResourceGraph, StackError> {
    StackBuilder::new(stack_id, env)?.build(provisioner)
}
