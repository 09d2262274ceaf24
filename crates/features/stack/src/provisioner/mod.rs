//! The cloud-provisioning collaborator seam.
//!
//! The stack builder only describes resources. The two lookups it cannot answer on its own,
//! the hosted zone and the certificate, go through a [`Provisioner`].

mod context;
mod error;

pub use context::{ContextProvisioner, PENDING_CERTIFICATE_PREFIX};
pub use error::{ProvisionError, ProvisionErrorExt};

use serde::Serialize;

/// A hosted zone as known to the cloud account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    pub id: String,
    pub name: String,
}

/// A DNS-validated certificate, possibly still pending validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRef {
    pub arn: String,
    pub domain_name: String,
}

/// Lookups the stack builder delegates. Calls are made sequentially and never retried.
pub trait Provisioner {
    /// # Errors
    /// [`ProvisionError::HostedZoneLookup`] when the account has no such zone.
    fn lookup_hosted_zone(&self, zone_name: &str) -> Result<HostedZone, ProvisionError>;

    /// # Errors
    /// [`ProvisionError::Certificate`] when the certificate cannot be requested.
    fn issue_certificate(
        &self,
        domain_name: &str,
        zone: &HostedZone,
    ) -> Result<CertificateRef, ProvisionError>;
}

impl<P: Provisioner + ?Sized> Provisioner for &P {
    fn lookup_hosted_zone(&self, zone_name: &str) -> Result<HostedZone, ProvisionError> {
        (**self).lookup_hosted_zone(zone_name)
    }

    fn issue_certificate(
        &self,
        domain_name: &str,
        zone: &HostedZone,
    ) -> Result<CertificateRef, ProvisionError> {
        (**self).issue_certificate(domain_name, zone)
    }
}
