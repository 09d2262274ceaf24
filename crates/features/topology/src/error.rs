use std::borrow::Cow;

/// Configuration-class errors. Always fatal to the current run.
#[izero_derive::izero_error]
pub enum ConfigError {
    #[error("Invalid hostname{}: '{value}'", format_context(.context))]
    InvalidHostname { value: String, context: Option<Cow<'static, str>> },

    #[error("Invalid subdomain{}: '{value}'", format_context(.context))]
    InvalidSubdomain { value: String, context: Option<Cow<'static, str>> },

    /// Exactly one of hosted zone / subdomain was provided.
    #[error("Hosted zone and subdomain must both be present or both be absent{}: {message}", format_context(.context))]
    AsymmetricDomainConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid project key{}: '{value}'", format_context(.context))]
    InvalidProjectKey { value: String, context: Option<Cow<'static, str>> },

    #[error("Missing value for '{field}'{}", format_context(.context))]
    MissingValue { field: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
