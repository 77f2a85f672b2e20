//! @acp:module "Policy Command"
//! @acp:summary "Show the derived CSS extraction policy"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::registry::Registry;

/// Options for the policy command
#[derive(Debug, Clone)]
pub struct PolicyOptions {
    /// Served path the policy was derived from
    pub served_path: String,
    /// CSS filename template the policy was derived from
    pub css_filename: String,
    /// Output as JSON
    pub json: bool,
}

/// Execute the policy command
pub fn execute_policy(options: PolicyOptions, registry: &Registry) -> Result<()> {
    let policy = registry.policy();

    if options.json {
        println!("{}", serde_json::to_string_pretty(policy)?);
        return Ok(());
    }

    println!("  Served path:  {}", options.served_path);
    println!("  CSS filename: {}", options.css_filename);
    if policy.public_path_is_relative {
        println!(
            "{} Relative asset paths, extracted CSS uses publicPath {:?}",
            style("✓").green(),
            policy.rewritten_public_path
        );
    } else {
        println!("{} Absolute asset paths, no rewriting", style("✓").green());
    }

    Ok(())
}
