//! # Workflow Rewriter
//!
//! Applies the resolved names, the trigger rule and a fresh nonce to one environment's
//! deploy workflow. The document is never parsed: an ordered list of `(anchor, producer)`
//! pairs is applied line by line, and every line that does not carry a known key passes
//! through untouched.
//!
//! Anchors that are absent from the document are skipped and reported as
//! [`RewriteWarning::MissingAnchor`]; they are not appended.

use crate::error::{RewriteWarning, WorkflowError, WorkflowErrorExt};
use crate::triggers::{TriggerRule, block_pattern, replace_block};
use izero_domain::constants::anchors;
use izero_domain::{AccountMode, ComputedNames, DeploymentConfig, Environment};
use izero_kernel::UniquenessToken;
use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;
use tracing::{debug, info, warn};

/// Everything a producer may draw a value from.
#[derive(Debug)]
struct AnchorValues<'a> {
    config: &'a DeploymentConfig,
    names: &'a ComputedNames,
    nonce: &'a UniquenessToken,
}

type Producer = fn(&AnchorValues<'_>) -> String;

/// Keys rewritten in every document, in application order.
const ANCHORS: [(&str, Producer); 11] = [
    (anchors::PROJECT_ENV, |v| v.names.environment.to_string()),
    (anchors::PROJECT_KEY, |v| v.config.project.key.clone()),
    (anchors::PROJECT_NONCE, |v| v.nonce.to_string()),
    (anchors::API_HOSTED_ZONE, |v| v.names.api_hosted_zone.clone()),
    (anchors::WEB_HOSTED_ZONE, |v| v.names.web_hosted_zone.clone()),
    (anchors::API_SUBDOMAIN, |v| v.names.api_hostname.clone()),
    (anchors::WEB_SUBDOMAIN, |v| v.names.web_hostname.clone()),
    (anchors::PROJECT_SPONSOR, |v| v.config.project.sponsor.clone()),
    (anchors::PROJECT_SERVICE, |v| v.config.project.service.clone()),
    (anchors::SERVICE_TEAM, |v| v.config.project.team.clone()),
    (anchors::SERVICE_EMAIL, |v| v.config.project.email.clone()),
];

/// Per-account role placeholders, e.g. `${{ vars.ACCOUNT_PRODUCTION_AWS_ROLE_ARN }}`.
const ROLE_ARN_PATTERN: &str = r"\$\{\{\s*vars\.ACCOUNT_[A-Z0-9_]+_AWS_ROLE_ARN\s*\}\}";
/// The one role a single-account topology uses.
pub const SHARED_ROLE_ARN: &str = "${{ vars.ACCOUNT_AWS_ROLE_ARN }}";

#[derive(Debug)]
struct Anchor {
    key: &'static str,
    pattern: Regex,
    produce: Producer,
}

/// Result of rewriting one document.
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub text: String,
    /// Nonce written into `PROJECT_NONCE`, whether or not the anchor was present.
    pub nonce: UniquenessToken,
    pub warnings: Vec<RewriteWarning>,
}

impl RewriteOutcome {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A validated config with its anchor patterns compiled once.
#[derive(Debug)]
pub struct Rewriter {
    config: DeploymentConfig,
    anchors: Vec<Anchor>,
    tags_block: Regex,
    branches_block: Regex,
    role_arn: Regex,
}

impl Rewriter {
    /// Validates `config` and prepares the anchor set.
    ///
    /// # Errors
    /// * [`WorkflowError::Config`] if the config fails validation; no text is touched.
    /// * [`WorkflowError::Pattern`] if an anchor pattern fails to compile.
    pub fn new(config: &DeploymentConfig) -> Result<Self, WorkflowError> {
        izero_topology::validate_config(config)?;

        let compiled = ANCHORS
            .iter()
            .map(|&(key, produce)| {
                let pattern = Regex::new(&format!(
                    r"(?mR)^([ \t]*){}:[ \t]*[^\r\n]*$",
                    regex::escape(key)
                ))
                .context(key)?;
                Ok::<_, WorkflowError>(Anchor { key, pattern, produce })
            })
            .collect::<Result<Vec<_>, WorkflowError>>()?;

        Ok(Self {
            config: config.clone(),
            anchors: compiled,
            tags_block: block_pattern(anchors::TAGS_LABEL).context(anchors::TAGS_LABEL)?,
            branches_block: block_pattern(anchors::BRANCHES_LABEL)
                .context(anchors::BRANCHES_LABEL)?,
            role_arn: Regex::new(ROLE_ARN_PATTERN).context("role ARN")?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    /// Rewrites `text` for `env` with a freshly generated nonce.
    ///
    /// # Errors
    /// See [`Self::rewrite_with_nonce`].
    pub fn rewrite(&self, text: &str, env: Environment) -> Result<RewriteOutcome, WorkflowError> {
        self.rewrite_with_nonce(text, env, UniquenessToken::generate())
    }

    /// Rewrites `text` for `env` using the given nonce.
    ///
    /// # Errors
    /// Returns [`WorkflowError::MultilineValue`] or [`WorkflowError::Yaml`] when a value cannot
    /// be written as a single-line scalar. Nothing is returned in that case.
    pub fn rewrite_with_nonce(
        &self,
        text: &str,
        env: Environment,
        nonce: UniquenessToken,
    ) -> Result<RewriteOutcome, WorkflowError> {
        let names = izero_topology::resolve(&self.config, env);
        let mut warnings = Vec::new();

        let mut text = Cow::Borrowed(text);
        if self.config.account_mode == AccountMode::Single {
            text = Cow::Owned(
                self.role_arn.replace_all(&text, NoExpand(SHARED_ROLE_ARN)).into_owned(),
            );
        }

        let rule = TriggerRule::for_environment(&self.config, env);
        let block =
            if rule.label == anchors::TAGS_LABEL { &self.tags_block } else { &self.branches_block };
        let items = rule
            .patterns
            .iter()
            .map(|pattern| render_scalar(rule.label, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        match replace_block(&text, block, &items) {
            Some(updated) => text = Cow::Owned(updated),
            None => warnings.push(RewriteWarning::MissingAnchor { key: rule.label }),
        }

        let values = AnchorValues { config: &self.config, names: &names, nonce: &nonce };
        for anchor in &self.anchors {
            if !anchor.pattern.is_match(&text) {
                warnings.push(RewriteWarning::MissingAnchor { key: anchor.key });
                continue;
            }
            let value = render_scalar(anchor.key, &(anchor.produce)(&values))?;
            let updated = anchor
                .pattern
                .replace_all(&text, |caps: &Captures<'_>| {
                    format!("{}{}: {value}", &caps[1], anchor.key)
                })
                .into_owned();
            debug!(key = anchor.key, %env, value = %value, "Anchor rewritten");
            text = Cow::Owned(updated);
        }

        for warning in &warnings {
            warn!(%env, "{warning}");
        }
        info!(%env, nonce = %nonce, warnings = warnings.len(), "Workflow rewritten");

        Ok(RewriteOutcome { text: text.into_owned(), nonce, warnings })
    }
}

/// Renders `value` as the single-line YAML scalar an emitter would write for it.
///
/// # Errors
/// Returns [`WorkflowError::MultilineValue`] when YAML needs a block scalar for `value`.
pub fn render_scalar(key: &'static str, value: &str) -> Result<String, WorkflowError> {
    let rendered = serde_yaml::to_string(value).context(key)?;
    let rendered = rendered.trim_end_matches('\n');
    if rendered.contains('\n') {
        return Err(WorkflowError::MultilineValue { key: key.into(), context: None });
    }
    Ok(rendered.to_owned())
}

/// One-shot form of [`Rewriter::rewrite`].
///
/// # Errors
/// See [`Rewriter::new`].
pub fn rewrite(
    text: &str,
    config: &DeploymentConfig,
    env: Environment,
) -> Result<RewriteOutcome, WorkflowError> {
    Rewriter::new(config)?.rewrite(text, env)
}
