use super::{CertificateRef, HostedZone, ProvisionError, Provisioner};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Prefix of certificate references that are requested but not yet validated.
pub const PENDING_CERTIFICATE_PREFIX: &str = "pending:certificate/";

/// Answers lookups from a cached context instead of calling the cloud.
///
/// The context is JSON: `{ "hostedZones": { "example.com": "Z0123456789" } }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextProvisioner {
    #[serde(default)]
    hosted_zones: BTreeMap<String, String>,
}

impl ContextProvisioner {
    pub fn new<I, K, V>(zones: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let hosted_zones = zones.into_iter().map(|(k, v)| (normalize(&k.into()), v.into())).collect();
        Self { hosted_zones }
    }

    /// # Errors
    /// Returns [`ProvisionError::Internal`] if `text` is not a valid context document.
    pub fn from_json(text: &str) -> Result<Self, ProvisionError> {
        let parsed: Self = serde_json::from_str(text)
            .map_err(|e| ProvisionError::from(format!("invalid provisioning context: {e}")))?;
        Ok(Self::new(parsed.hosted_zones))
    }
}

impl Provisioner for ContextProvisioner {
    fn lookup_hosted_zone(&self, zone_name: &str) -> Result<HostedZone, ProvisionError> {
        let name = normalize(zone_name);
        let id = self
            .hosted_zones
            .get(&name)
            .ok_or_else(|| ProvisionError::HostedZoneLookup { zone: name.clone(), context: None })?;
        debug!(zone = %name, id = %id, "Hosted zone resolved from context");
        Ok(HostedZone { id: id.clone(), name })
    }

    fn issue_certificate(
        &self,
        domain_name: &str,
        zone: &HostedZone,
    ) -> Result<CertificateRef, ProvisionError> {
        let domain = normalize(domain_name);
        if !(domain == zone.name || domain.ends_with(&format!(".{}", zone.name))) {
            return Err(ProvisionError::Certificate {
                domain_name: domain,
                message: format!("not inside hosted zone '{}'", zone.name).into(),
                context: None,
            });
        }
        Ok(CertificateRef { arn: format!("{PENDING_CERTIFICATE_PREFIX}{domain}"), domain_name: domain })
    }
}

fn normalize(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_resolve_case_and_dot_insensitively() {
        let provisioner = ContextProvisioner::from_json(r#"{"hostedZones":{"Acme.dev.":"Z1"}}"#).unwrap();
        let zone = provisioner.lookup_hosted_zone("acme.DEV").unwrap();
        assert_eq!(zone, HostedZone { id: "Z1".into(), name: "acme.dev".into() });
    }

    #[test]
    fn unknown_zone_fails_lookup() {
        let err = ContextProvisioner::default().lookup_hosted_zone("acme.dev").unwrap_err();
        assert_eq!(err.kind(), "HostedZoneLookup");
    }

    #[test]
    fn certificates_stay_inside_their_zone() {
        let provisioner = ContextProvisioner::new([("acme.dev", "Z1")]);
        let zone = provisioner.lookup_hosted_zone("acme.dev").unwrap();

        let cert = provisioner.issue_certificate("api.acme.dev", &zone).unwrap();
        assert_eq!(cert.arn, "pending:certificate/api.acme.dev");

        let err = provisioner.issue_certificate("api.other.dev", &zone).unwrap_err();
        assert_eq!(err.kind(), "Certificate");
    }

    #[test]
    fn malformed_context_is_rejected() {
        let err = ContextProvisioner::from_json("[1, 2]").unwrap_err();
        assert_eq!(err.kind(), "Internal");
    }
}
