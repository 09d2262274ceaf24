//! # Domain Name Validation
//!
//! Syntax checks for hosted zones and subdomains, plus the paired-presence rule.
//! Everything here is side-effect free and runs before any document is touched or any
//! resource is described.
//!
//! Grammar:
//! * a **label** is 1-63 characters of `[A-Za-z0-9-]`, not starting or ending with `-`;
//! * a **hostname** (hosted zone) is at least two dot-separated labels, at most 253
//!   characters, and its last label is not purely numeric;
//! * a **subdomain** is one or more dot-separated labels (resolved names such as
//!   `api.dev` are subdomains too), or the apex marker.

use crate::error::{ConfigError, ConfigErrorExt};
use izero_domain::constants::is_apex;
use izero_domain::{DeploymentConfig, Environment};

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Checks a single DNS label.
#[must_use]
pub fn is_valid_label(label: &str) -> bool {
    (1..=MAX_LABEL_LEN).contains(&label.len())
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Checks a hosted zone name such as `example.com`.
#[must_use]
pub fn is_valid_hostname(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_NAME_LEN {
        return false;
    }
    let labels: Vec<&str> = value.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| is_valid_label(label))
        && labels.last().is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
}

/// Checks a subdomain such as `api`, `api.dev` or the apex marker.
#[must_use]
pub fn is_valid_subdomain(value: &str) -> bool {
    if is_apex(value) {
        return true;
    }
    !value.is_empty() && value.len() <= MAX_NAME_LEN && value.split('.').all(is_valid_label)
}

/// Validates a hosted zone / subdomain pair. Empty strings count as absent.
///
/// # Errors
/// * [`ConfigError::InvalidHostname`] if the zone is present and malformed.
/// * [`ConfigError::InvalidSubdomain`] if the subdomain is present and malformed.
/// * [`ConfigError::AsymmetricDomainConfig`] if exactly one of the two is present.
pub fn validate(hosted_zone: Option<&str>, subdomain: Option<&str>) -> Result<(), ConfigError> {
    let hosted_zone = present(hosted_zone);
    let subdomain = present(subdomain);

    if let Some(zone) = hosted_zone
        && !is_valid_hostname(zone)
    {
        return Err(ConfigError::InvalidHostname { value: zone.to_owned(), context: None });
    }

    if let Some(sub) = subdomain
        && !is_valid_subdomain(sub)
    {
        return Err(ConfigError::InvalidSubdomain { value: sub.to_owned(), context: None });
    }

    match (hosted_zone, subdomain) {
        (Some(zone), None) => Err(ConfigError::AsymmetricDomainConfig {
            message: format!("hosted zone '{zone}' has no subdomain").into(),
            context: None,
        }),
        (None, Some(sub)) => Err(ConfigError::AsymmetricDomainConfig {
            message: format!("subdomain '{sub}' has no hosted zone").into(),
            context: None,
        }),
        _ => Ok(()),
    }
}

/// Validates a whole deployment config at the process boundary.
///
/// Beyond the raw answers, the names resolved for every environment are checked too, so a
/// config that passes here cannot fail the same checks later at synthesis time.
///
/// # Errors
/// Returns the first [`ConfigError`] found.
pub fn validate_config(config: &DeploymentConfig) -> Result<(), ConfigError> {
    validate_project_key(&config.project.key)?;

    let domain = &config.domain;
    validate(domain.hosted_zone.as_deref(), domain.api_subdomain.as_deref())
        .context("hosted_zone / api_subdomain")?;

    if !is_valid_subdomain(&domain.web_subdomain) {
        return Err(ConfigError::InvalidSubdomain {
            value: domain.web_subdomain.clone(),
            context: Some("web_subdomain".into()),
        });
    }

    for (field, label) in [
        ("development_subdomain", &domain.development_subdomain),
        ("sandbox_subdomain", &domain.sandbox_subdomain),
    ] {
        if !is_valid_label(label) {
            return Err(ConfigError::InvalidSubdomain {
                value: label.clone(),
                context: Some(field.into()),
            });
        }
    }

    let triggers = &config.triggers;
    for (field, pattern) in [
        ("development_branch", &triggers.development_branch),
        ("production_tag", &triggers.production_tag),
        ("sandbox_branch", &triggers.sandbox_branch),
    ] {
        if pattern.trim().is_empty() {
            return Err(ConfigError::MissingValue { field: field.into(), context: None });
        }
    }

    for env in Environment::ALL {
        let names = crate::resolver::resolve(config, env);
        validate(Some(names.api_hosted_zone.as_str()), Some(names.api_hostname.as_str()))
            .context(format!("resolved {env} names"))?;
    }

    Ok(())
}

fn validate_project_key(key: &str) -> Result<(), ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::MissingValue { field: "project.key".into(), context: None });
    }
    if !key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
        return Err(ConfigError::InvalidProjectKey { value: key.to_owned(), context: None });
    }
    Ok(())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_dns_rules() {
        assert!(is_valid_label("api"));
        assert!(is_valid_label("a-1"));
        assert!(!is_valid_label("-api"));
        assert!(!is_valid_label("api-"));
        assert!(!is_valid_label("a_b"));
        assert!(!is_valid_label(""));
        assert!(!is_valid_label(&"a".repeat(64)));
    }

    #[test]
    fn hostnames_need_a_parent_zone() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("dev.Example.co"));
        assert!(!is_valid_hostname("localhost"));
        assert!(!is_valid_hostname("example.com."));
        assert!(!is_valid_hostname("10.0.0.1"));
        assert!(!is_valid_hostname("exa mple.com"));
    }

    #[test]
    fn subdomains_accept_nesting_and_apex() {
        assert!(is_valid_subdomain("api"));
        assert!(is_valid_subdomain("api.dev"));
        assert!(is_valid_subdomain("@"));
        assert!(is_valid_subdomain("root"));
        assert!(!is_valid_subdomain("api..dev"));
        assert!(!is_valid_subdomain(""));
    }

    #[test]
    fn empty_values_count_as_absent() {
        assert!(validate(Some(""), None).is_ok());
        assert!(validate(Some("  "), Some("")).is_ok());
    }

    #[test]
    fn syntax_is_checked_before_pairing() {
        let err = validate(Some("bad_zone"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHostname { .. }));

        let err = validate(None, Some("-api")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSubdomain { .. }));
    }

    #[test]
    fn project_key_must_be_name_safe() {
        assert!(validate_project_key("store-front_1").is_ok());
        assert!(matches!(
            validate_project_key("store front").unwrap_err(),
            ConfigError::InvalidProjectKey { .. }
        ));
        assert!(matches!(validate_project_key("").unwrap_err(), ConfigError::MissingValue { .. }));
    }
}
