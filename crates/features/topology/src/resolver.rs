//! # Topology Resolver
//!
//! The single decision table that maps `(account mode, environment, labels, zone)` to the
//! names used by both the workflow rewriter and the stack builder.
//!
//! | mode   | env         | api hostname      | web hostname | hosted zone          |
//! |--------|-------------|-------------------|--------------|----------------------|
//! | single | production  | `api`             | `web`        | `zone`               |
//! | single | development | `api.dev`         | `dev`        | `zone`               |
//! | single | sandbox     | `api.sandbox`     | `sandbox`    | `zone`               |
//! | multi  | production  | `api.web`         | `web`        | `zone`               |
//! | multi  | development | `api.web`         | `web`        | `dev.zone`           |
//! | multi  | sandbox     | `api.web`         | `web`        | `sandbox.zone`       |
//!
//! The apex marker is never dot-joined: `api` joined with `@` is just `api`.

use izero_domain::constants::{APEX_MARKER, is_apex};
use izero_domain::{AccountMode, BuildMode, ComputedNames, DeploymentConfig, Environment};
use tracing::debug;

/// Computes the names for one environment. Pure; call it again for every environment.
#[must_use]
pub fn resolve(config: &DeploymentConfig, env: Environment) -> ComputedNames {
    let domain = &config.domain;
    let zone = domain.hosted_zone.as_deref().map(str::trim).unwrap_or_default();
    let api = domain.api_subdomain.as_deref().map(str::trim).unwrap_or_default();
    let web = domain.web_subdomain.trim();

    let (api_hostname, web_hostname, hosted_zone) = match config.account_mode {
        AccountMode::Single => {
            let build_label = match env {
                Environment::Production => None,
                Environment::Development => Some(domain.development_subdomain.trim()),
                Environment::Sandbox => Some(domain.sandbox_subdomain.trim()),
            };
            match build_label {
                None => (render_label(api), render_label(web), zone.to_owned()),
                Some(label) => {
                    let api_hostname =
                        if api.is_empty() { String::new() } else { join_labels(api, label) };
                    (api_hostname, label.to_owned(), zone.to_owned())
                },
            }
        },
        AccountMode::Multi => {
            let hosted_zone = match env {
                Environment::Production => zone.to_owned(),
                Environment::Development => nest_zone(domain.development_subdomain.trim(), zone),
                Environment::Sandbox => nest_zone(domain.sandbox_subdomain.trim(), zone),
            };
            let api_hostname = if api.is_empty() { String::new() } else { join_labels(api, web) };
            (api_hostname, render_label(web), hosted_zone)
        },
    };

    let build_mode = derive_build_mode(Some(&hosted_zone), Some(&api_hostname));
    debug!(
        environment = %env,
        account_mode = %config.account_mode,
        api_hostname = %api_hostname,
        web_hostname = %web_hostname,
        hosted_zone = %hosted_zone,
        build_mode = %build_mode,
        "Resolved topology"
    );

    ComputedNames {
        environment: env,
        api_hostname,
        web_hostname,
        api_hosted_zone: hosted_zone.clone(),
        web_hosted_zone: hosted_zone,
        build_mode,
    }
}

/// `Static` iff both the hosted zone and the subdomain are present and non-empty.
///
/// Shared by [`resolve`] and the synthesis-time stack builder so both agree.
#[must_use]
pub fn derive_build_mode(hosted_zone: Option<&str>, subdomain: Option<&str>) -> BuildMode {
    let filled = |v: Option<&str>| v.is_some_and(|v| !v.trim().is_empty());
    if filled(hosted_zone) && filled(subdomain) { BuildMode::Static } else { BuildMode::Ephemeral }
}

/// Dot-joins two labels; an apex or empty side collapses to the other side.
///
/// Two apex labels stay the apex marker, two empty labels stay empty.
#[must_use]
pub fn join_labels(left: &str, right: &str) -> String {
    match (concrete(left), concrete(right)) {
        (Some(l), Some(r)) => format!("{l}.{r}"),
        (Some(only), None) | (None, Some(only)) => only.to_owned(),
        (None, None) if is_apex(left) || is_apex(right) => APEX_MARKER.to_owned(),
        (None, None) => String::new(),
    }
}

/// Fully qualified host for `subdomain` inside `zone`; the apex maps to the zone itself.
#[must_use]
pub fn merge_domain(subdomain: &str, zone: &str) -> String {
    let zone = zone.trim().trim_end_matches('.');
    match concrete(subdomain) {
        Some(sub) if !zone.is_empty() => format!("{sub}.{zone}"),
        Some(sub) => sub.to_owned(),
        None => zone.to_owned(),
    }
}

fn render_label(label: &str) -> String {
    if is_apex(label) { APEX_MARKER.to_owned() } else { label.to_owned() }
}

fn nest_zone(label: &str, zone: &str) -> String {
    if zone.is_empty() { String::new() } else { join_labels(label, zone) }
}

fn concrete(label: &str) -> Option<&str> {
    let label = label.trim();
    (!label.is_empty() && !is_apex(label)).then_some(label)
}
