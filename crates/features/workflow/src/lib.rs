//! Workflow feature slice: rewrites the per-environment deploy workflows from a validated
//! deployment config.

mod error;
mod files;
mod rewriter;
mod triggers;

pub use error::{RewriteWarning, WorkflowError, WorkflowErrorExt};
pub use files::{FileReport, WORKFLOWS_DIR, WorkflowSet};
pub use rewriter::{RewriteOutcome, Rewriter, SHARED_ROLE_ARN, render_scalar, rewrite};
pub use triggers::TriggerRule;
