//! Facade crate for the initzero deployment slices and shared modules.
//! Re-exports domain/kernel primitives and the topology resolver both consumers share.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `izero` with the desired feature flags (`workflow`/`stack`).
//! - Load a [`domain::DeploymentConfig`] with [`kernel::config::load_config`], then hand it
//!   to the rewriter or build a stack from synthesis-time variables.

pub use izero_domain as domain;
pub use izero_kernel as kernel;
pub use izero_topology as topology;

#[cfg(feature = "stack")]
pub use izero_stack as stack;
#[cfg(feature = "workflow")]
pub use izero_workflow as workflow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_resolves_through_the_shared_resolver() {
        let config = domain::DeploymentConfig::default();
        let names = topology::resolve(&config, domain::Environment::Development);
        assert_eq!(names.web_hostname, "dev");
        assert_eq!(names.build_mode, domain::BuildMode::Ephemeral);
    }
}
