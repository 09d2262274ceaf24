//! Stack feature slice: describes the API's cloud resources at synthesis time.
//!
//! The graph is conditional on the build mode. `ephemeral` stacks get only the compute unit
//! and its gateway; `static` stacks add the certificate, the custom domain mapping and the
//! DNS alias record.

mod builder;
mod env;
mod error;
mod graph;
mod provisioner;

pub use builder::{
    ALIAS_RECORD_ID, CERTIFICATE_ID, FUNCTION_ID, ResourceNames, StackBuilder, function, synthesize,
};
pub use env::StackEnv;
pub use error::{StackError, StackErrorExt};
pub use graph::{
    FunctionSpec, Resource, ResourceGraph, ResourceKind, ResourceSpec, attribute_ref, outputs,
};
pub use provisioner::{
    CertificateRef, ContextProvisioner, HostedZone, PENDING_CERTIFICATE_PREFIX, ProvisionError,
    ProvisionErrorExt, Provisioner,
};
