use crate::provisioner::ProvisionError;
use izero_topology::ConfigError;
use std::borrow::Cow;

#[izero_derive::izero_error]
pub enum StackError {
    /// Zone and subdomain failed validation; nothing was described.
    #[error("Invalid synthesis environment{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    /// Passed through from the provisioning collaborator, never retried.
    #[error("Provisioning failed{}: {source}", format_context(.context))]
    Provisioning { source: ProvisionError, context: Option<Cow<'static, str>> },
}
