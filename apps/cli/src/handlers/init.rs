use crate::services::config::load_validated;
use crate::services::render::render_file_report;
use anyhow::{Context, Result};
use izero::domain::Environment;
use izero::workflow::{Rewriter, WorkflowSet};
use std::path::Path;
use tracing::info;

/// Rewrites the deploy workflows under `root`, each with its own fresh nonce.
///
/// Validation runs before any file is opened. A missing workflow file is an error; missing
/// keys inside a file are reported and skipped.
///
/// # Errors
/// Returns an error if the config is invalid or a workflow file cannot be read or written.
pub fn run(config: Option<&Path>, root: &Path, envs: &[Environment], dry_run: bool) -> Result<()> {
    let config = load_validated(config)?;
    let rewriter = Rewriter::new(&config)?;
    let set = WorkflowSet::new(root);

    let envs = if envs.is_empty() { &Environment::ALL[..] } else { envs };
    info!(root = %root.display(), count = envs.len(), dry_run, "Rewriting workflows");

    let reports = set
        .apply_all(&rewriter, envs, dry_run)
        .with_context(|| format!("Failed to update workflows under {}", root.display()))?;

    for report in &reports {
        render_file_report(report);
        if let Some(preview) = &report.preview {
            println!("--- {}", report.path.display());
            print!("{preview}");
        }
    }

    Ok(())
}
