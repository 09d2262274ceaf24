use std::borrow::Cow;

#[izero_derive::izero_error]
pub enum ProvisionError {
    #[error("Hosted zone '{zone}' not found{}", format_context(.context))]
    HostedZoneLookup { zone: String, context: Option<Cow<'static, str>> },

    #[error("Certificate for '{domain_name}' could not be issued{}: {message}", format_context(.context))]
    Certificate {
        domain_name: String,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Provisioner error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
