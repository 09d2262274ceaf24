use anyhow::{Context, Result};
use izero::stack::{ContextProvisioner, StackEnv, synthesize};
use std::fs;
use std::path::Path;

/// Describes the stack from the process environment and prints it as JSON on stdout.
///
/// # Errors
/// Returns an error if the context file is unreadable, the environment is invalid, or a
/// provisioning lookup fails.
pub fn run(stack_id: &str, context: Option<&Path>) -> Result<()> {
    let provisioner = match context {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read context file {}", path.display()))?;
            ContextProvisioner::from_json(&text)?
        },
        None => ContextProvisioner::default(),
    };

    let env = StackEnv::from_process();
    let graph = synthesize(stack_id, &env, &provisioner).context("Stack synthesis failed")?;

    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}
