use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-run nonce used to keep resource names apart inside a shared account.
///
/// Regenerated on every rewrite; two runs are not expected to produce the same token,
/// and collisions are tolerated rather than prevented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniquenessToken(String);

impl UniquenessToken {
    pub const LEN: usize = 8;

    /// Draws a fresh token.
    #[must_use]
    pub fn generate() -> Self {
        Self(crate::project_nonce!())
    }

    /// Accepts an existing token if it has the expected shape.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let well_formed = value.len() == Self::LEN
            && value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        well_formed.then(|| Self(value.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniquenessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UniquenessToken {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| {
            format!("nonce must be {} lowercase alphanumeric characters, got '{value}'", Self::LEN)
        })
    }
}

impl From<UniquenessToken> for String {
    fn from(token: UniquenessToken) -> Self {
        token.0
    }
}
