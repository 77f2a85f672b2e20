//! @acp:module "Resolve Command"
//! @acp:summary "Resolve a single customizer flag to its fragment"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde_json::json;

use crate::registry::{BuildMode, Registry};

/// Options for the resolve command
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Flag name to resolve
    pub flag: String,
    /// Which producer to invoke
    pub mode: BuildMode,
}

/// Execute the resolve command
pub fn execute_resolve(options: ResolveOptions, registry: &Registry) -> Result<()> {
    let descriptor = registry.lookup(&options.flag)?;
    let fragment = registry.resolve(descriptor, options.mode)?;

    eprintln!(
        "{} {} ({}) for {}",
        style("→").cyan(),
        descriptor.flag(),
        descriptor.target(),
        options.mode
    );

    let output = json!({
        "flag": descriptor.flag(),
        "target": descriptor.target(),
        "fileMatcher": descriptor.file_matcher(),
        "fragment": fragment,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
