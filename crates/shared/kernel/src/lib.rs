//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading and the per-run project nonce.
//!
//! ## Project nonce
//! Use `project_nonce!` for the short lowercase token that disambiguates resource names:
//! ```rust
//! # use izero_kernel::project_nonce;
//! let nonce = project_nonce!();
//! assert_eq!(nonce.len(), 8);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use izero_kernel::config::load_config;
//! use izero_kernel::domain::DeploymentConfig;
//!
//! let cfg: DeploymentConfig = load_config(Some("izero.toml")).unwrap();
//! ```
pub mod config;
pub mod token;

/// Lowercase ASCII letters and digits, the characters a nonce may contain.
pub const NONCE_ALPHABET: &[char; 36] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

pub use izero_domain as domain;
pub use nanoid::nanoid;
pub use token::UniquenessToken;

/// Generates a lowercase alphanumeric nonce (8 characters by default).
#[macro_export]
macro_rules! project_nonce {
    () => {
        $crate::nanoid!({ $crate::token::UniquenessToken::LEN }, $crate::NONCE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!({ $size }, $crate::NONCE_ALPHABET)
    };
}
