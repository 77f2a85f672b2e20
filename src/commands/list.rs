//! @acp:module "List Command"
//! @acp:summary "Show registered customizers"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::registry::{Flag, Registry, TargetCollection};

/// Options for the list command
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListEntry {
    flag: Flag,
    target: TargetCollection,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_matcher: Option<String>,
    description: &'static str,
}

fn entries(registry: &Registry) -> Result<Vec<ListEntry>> {
    registry
        .flags()
        .into_iter()
        .map(|flag| -> Result<ListEntry> {
            let descriptor = registry.descriptor(flag)?;
            Ok(ListEntry {
                flag,
                target: descriptor.target(),
                file_matcher: descriptor.file_matcher().map(|m| m.as_str().to_string()),
                description: flag.description(),
            })
        })
        .collect()
}

/// Execute the list command
pub fn execute_list(options: ListOptions, registry: &Registry) -> Result<()> {
    let entries = entries(registry)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} {} customizers registered", style("→").cyan(), entries.len());
    for entry in &entries {
        println!(
            "  {:<14} {:<14} {}",
            style(entry.flag.name()).bold(),
            entry.target.name(),
            entry.description
        );
        if let Some(matcher) = &entry.file_matcher {
            println!("  {:<14} {:<14} matches {}", "", "", style(matcher).dim());
        }
    }

    Ok(())
}
