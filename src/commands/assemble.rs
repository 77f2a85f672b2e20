//! @acp:module "Assemble Command"
//! @acp:summary "Fold enabled flags into build collections"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::assemble::assemble;
use crate::registry::{BuildMode, Registry};

/// Options for the assemble command
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Enabled flags, in order
    pub flags: Vec<String>,
    /// Which producers to invoke
    pub mode: BuildMode,
    /// Output as JSON
    pub json: bool,
}

/// Execute the assemble command
pub fn execute_assemble(options: AssembleOptions, registry: &Registry) -> Result<()> {
    let config = assemble(registry, &options.flags, options.mode)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!(
        "{} Assembled {} flag(s) for {}",
        style("→").cyan(),
        options.flags.len(),
        options.mode
    );
    for preset in &config.presets {
        println!("  preset  {}", preset);
    }
    for plugin in &config.plugins {
        println!("  plugin  {}", plugin);
    }
    for rule in &config.rules {
        println!(
            "  rule    {}  {}",
            style(&rule.test).bold(),
            rule.application_order().join(" → ")
        );
    }
    for inline in &config.inline_config {
        println!("  inline  {}", inline);
    }
    println!("{} Done", style("✓").green());

    Ok(())
}
