//! CI trigger rules and trigger-list replacement.

use izero_domain::constants::anchors::{BRANCHES_LABEL, TAGS_LABEL};
use izero_domain::{DeploymentConfig, Environment};
use regex::{Captures, Regex};

/// The trigger list an environment's workflow should carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerRule {
    /// Label of the list (`tags` or `branches`).
    pub label: &'static str,
    pub patterns: Vec<String>,
}

impl TriggerRule {
    /// Production deploys on tags; development and sandbox deploy on branches.
    ///
    /// A sandbox that follows development also deploys from the development branch, listed
    /// after the sandbox branch.
    #[must_use]
    pub fn for_environment(config: &DeploymentConfig, env: Environment) -> Self {
        let triggers = &config.triggers;
        match env {
            Environment::Production => {
                Self { label: TAGS_LABEL, patterns: vec![triggers.production_tag.clone()] }
            },
            Environment::Development => {
                Self { label: BRANCHES_LABEL, patterns: vec![triggers.development_branch.clone()] }
            },
            Environment::Sandbox => {
                let mut patterns = vec![triggers.sandbox_branch.clone()];
                if triggers.sandbox_follows_development {
                    patterns.push(triggers.development_branch.clone());
                }
                Self { label: BRANCHES_LABEL, patterns }
            },
        }
    }
}

/// Pattern for a list label followed by its first `- item` line.
///
/// Group 1 is the label line, group 2 the indentation of the first item.
pub(crate) fn block_pattern(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?mR)^([ \t]*{}:[ \t]*)$\r?\n([ \t]*)-[^\r\n]*", regex::escape(label)))
}

/// Replaces the items of the first matching list with `items`, which are already rendered
/// scalars. Indentation and line endings are kept.
///
/// Returns `None` when the document has no such list.
pub(crate) fn replace_block(text: &str, block: &Regex, items: &[String]) -> Option<String> {
    let caps = block.captures(text)?;
    let whole = caps.get(0)?;
    let indent = &caps[2];
    let end = list_end(text, whole.end(), indent);
    let replacement = render_block(&caps, items);

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..whole.start()]);
    out.push_str(&replacement);
    out.push_str(&text[end..]);
    Some(out)
}

/// Extends a list past its first item over the following lines that start with the same
/// indentation and a dash. Deeper or shallower items belong to other lists.
fn list_end(text: &str, mut end: usize, indent: &str) -> usize {
    loop {
        let rest = &text[end..];
        let Some(line_start) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
            return end;
        };
        let is_item = line_start.strip_prefix(indent).is_some_and(|item| item.starts_with('-'));
        if !is_item {
            return end;
        }
        let skipped = rest.len() - line_start.len();
        let line_len = line_start.find(['\r', '\n']).unwrap_or(line_start.len());
        end += skipped + line_len;
    }
}

fn render_block(caps: &Captures<'_>, items: &[String]) -> String {
    let newline = if caps[0].contains("\r\n") { "\r\n" } else { "\n" };
    let indent = &caps[2];

    let mut block = caps[1].to_owned();
    for item in items {
        block.push_str(newline);
        block.push_str(indent);
        block.push_str("- ");
        block.push_str(item);
    }
    block
}
