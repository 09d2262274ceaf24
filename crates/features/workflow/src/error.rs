use izero_topology::ConfigError;
use std::borrow::Cow;
use std::fmt;

#[izero_derive::izero_error]
pub enum WorkflowError {
    /// Raised before any document is touched.
    #[error("Invalid deployment config{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid anchor pattern{}: {source}", format_context(.context))]
    Pattern { source: regex::Error, context: Option<Cow<'static, str>> },

    #[error("Failed to render YAML value{}: {source}", format_context(.context))]
    Yaml { source: serde_yaml::Error, context: Option<Cow<'static, str>> },

    /// Anchors are single lines; a value YAML can only write as a block is refused.
    #[error("Value for '{key}' does not fit on one line{}", format_context(.context))]
    MultilineValue { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Workflow file error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// Soft findings of a rewrite. The document is still produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteWarning {
    /// The key (or trigger label) does not occur in the document, so nothing was written for it.
    MissingAnchor { key: &'static str },
}

impl fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor { key } => write!(f, "anchor '{key}' not found, left unset"),
        }
    }
}
