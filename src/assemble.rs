//! @acp:module "Build Assembler"
//! @acp:summary "Folds enabled flags into preset, plugin and rule lists"
//! @acp:domain registry
//! @acp:layer service
//!
//! Reference implementation of the collaborator that consumes the registry.
//! Fragments are appended in the order their flags were enabled.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::Rule;
use crate::registry::{BuildMode, Fragment, Registry, TargetCollection};
use crate::resolve::ModuleReference;

/// Collections produced from a set of enabled flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: BuildMode,
    pub presets: Vec<ModuleReference>,
    pub plugins: Vec<ModuleReference>,
    pub rules: Vec<Rule>,
    pub inline_config: Vec<String>,
    /// Patterns the catch-all file loader must skip so customized rules
    /// see those files
    pub file_loader_exclusions: Vec<String>,
}

impl BuildConfig {
    /// Number of fragments in the preset and plugin collections
    pub fn module_count(&self) -> usize {
        self.presets.len() + self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.module_count() == 0 && self.rules.is_empty() && self.inline_config.is_empty()
    }
}

/// Resolve every enabled flag and append it to its target collection
///
/// Unknown names and resolution failures abort assembly.
pub fn assemble<S: AsRef<str>>(registry: &Registry, enabled: &[S], mode: BuildMode) -> Result<BuildConfig> {
    let mut config = BuildConfig {
        mode,
        ..Default::default()
    };
    let mut seen = HashSet::new();

    for name in enabled {
        let name = name.as_ref();
        let descriptor = registry.lookup(name)?;

        if !seen.insert(descriptor.flag()) {
            tracing::warn!("Customizer {} enabled more than once, ignoring {}", descriptor.flag(), name);
            continue;
        }

        let fragment = registry.resolve(descriptor, mode)?;
        match (descriptor.target(), fragment) {
            (TargetCollection::Presets, Fragment::Module(module)) => config.presets.push(module),
            (TargetCollection::Plugins, Fragment::Module(module)) => config.plugins.push(module),
            (TargetCollection::Rules, Fragment::Rule(rule)) => {
                if let Some(matcher) = descriptor.file_matcher() {
                    config.file_loader_exclusions.push(matcher.as_str().to_string());
                }
                config.rules.push(rule);
            }
            (TargetCollection::InlineConfig, Fragment::Inline(inline)) => {
                config.inline_config.push(inline)
            }
            (_, fragment) => return Err(descriptor.mismatched(&fragment)),
        }
    }

    Ok(config)
}
