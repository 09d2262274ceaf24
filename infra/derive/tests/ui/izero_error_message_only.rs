use izero_derive::izero_error;
use std::borrow::Cow;

#[izero_error]
pub enum LookupError {
    #[error("Unknown zone{}: {zone}", format_context(.context))]
    UnknownZone { zone: String, context: Option<Cow<'static, str>> },

    #[error("Lookup rejected: {reason}")]
    Rejected { reason: String },
}

fn lookup(zone: &str) -> Result<(), LookupError> {
    Err(LookupError::UnknownZone { zone: zone.to_owned(), context: None })
}

fn main() {
    let err = lookup("example.com").context("Resolving hosted zone").unwrap_err();
    assert_eq!(err.kind(), "UnknownZone");
    assert_eq!(err.to_string(), "Unknown zone (Resolving hosted zone): example.com");

    let rejected = LookupError::Rejected { reason: "throttled".to_owned() };
    assert_eq!(rejected.kind(), "Rejected");
}
