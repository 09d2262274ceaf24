//! Topology feature slice: domain validation and per-environment name resolution.
//!
//! Both the workflow rewriter and the stack builder call into this crate, so the decision
//! table lives in exactly one place.

mod error;
mod resolver;
mod validator;

pub use error::{ConfigError, ConfigErrorExt};
pub use resolver::{derive_build_mode, join_labels, merge_domain, resolve};
pub use validator::{is_valid_hostname, is_valid_label, is_valid_subdomain, validate, validate_config};
