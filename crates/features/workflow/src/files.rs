//! The on-disk set of deploy workflows, one per environment.

use crate::error::{RewriteWarning, WorkflowError, WorkflowErrorExt};
use crate::rewriter::Rewriter;
use izero_domain::Environment;
use izero_kernel::UniquenessToken;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory holding the workflows, relative to the project root.
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Locates `deploy-{environment}.yml` under a project root.
#[derive(Debug, Clone)]
pub struct WorkflowSet {
    root: PathBuf,
}

/// What happened to one workflow file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub environment: Environment,
    pub path: PathBuf,
    pub nonce: UniquenessToken,
    pub warnings: Vec<RewriteWarning>,
    /// Rewritten text; only kept when nothing was written.
    pub preview: Option<String>,
}

impl WorkflowSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path(&self, env: Environment) -> PathBuf {
        self.root.join(WORKFLOWS_DIR).join(env.workflow_file())
    }

    /// Rewrites the workflow for `env` in place, or only previews it when `dry_run` is set.
    ///
    /// # Errors
    /// Returns [`WorkflowError::Io`] if the file is missing or cannot be read or written, and
    /// any error of [`Rewriter::rewrite`].
    pub fn apply(
        &self,
        rewriter: &Rewriter,
        env: Environment,
        dry_run: bool,
    ) -> Result<FileReport, WorkflowError> {
        let (report, text) = self.stage(rewriter, env)?;
        commit(report, text, dry_run)
    }

    /// Rewrites every workflow in `envs`. All of them are read and rewritten before the first
    /// one is written, so a missing or unrenderable file leaves the whole set untouched.
    ///
    /// # Errors
    /// See [`Self::apply`].
    pub fn apply_all(
        &self,
        rewriter: &Rewriter,
        envs: &[Environment],
        dry_run: bool,
    ) -> Result<Vec<FileReport>, WorkflowError> {
        let staged = envs
            .iter()
            .map(|&env| self.stage(rewriter, env))
            .collect::<Result<Vec<_>, _>>()?;

        staged.into_iter().map(|(report, text)| commit(report, text, dry_run)).collect()
    }

    fn stage(
        &self,
        rewriter: &Rewriter,
        env: Environment,
    ) -> Result<(FileReport, String), WorkflowError> {
        let path = self.path(env);
        let text = fs::read_to_string(&path).context(format!("read {}", path.display()))?;
        let outcome = rewriter.rewrite(&text, env)?;

        let report = FileReport {
            environment: env,
            path,
            nonce: outcome.nonce,
            warnings: outcome.warnings,
            preview: None,
        };
        Ok((report, outcome.text))
    }
}

fn commit(mut report: FileReport, text: String, dry_run: bool) -> Result<FileReport, WorkflowError> {
    if dry_run {
        report.preview = Some(text);
    } else {
        fs::write(&report.path, &text).context(format!("write {}", report.path.display()))?;
        info!(path = %report.path.display(), "Workflow file updated");
    }
    Ok(report)
}
