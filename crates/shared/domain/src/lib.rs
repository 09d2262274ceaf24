//! # Domain Models
//!
//! Pure deployment types shared by the resolver, the workflow rewriter and the stack builder.
//! Keep it lean: no I/O and no decision logic, just data, names and simple helpers.

pub mod config;
pub mod constants;
pub mod topology;

pub use config::{DeploymentConfig, DeploymentConfigInner, DomainConfig, ProjectConfig, TriggerConfig};
pub use topology::{AccountMode, BuildMode, ComputedNames, Environment};
