//! @acp:module "Configuration"
//! @acp:summary "Registry construction inputs: served path, CSS filename, module root"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::policy::{ExtractionPolicy, DEFAULT_CSS_FILENAME, RELATIVE_ROOT};
use crate::registry::Registry;
use crate::resolve::{BareResolver, ModuleResolver, NodeModulesResolver};

/// Default config file name
pub const CONFIG_FILE: &str = ".customizers.json";

fn default_served_path() -> String {
    "/".to_string()
}

fn default_css_filename() -> String {
    DEFAULT_CSS_FILENAME.to_string()
}

/// @acp:summary "Inputs needed to build the customizer registry"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// URL path prefix the built assets are served under
    #[serde(default = "default_served_path")]
    pub served_path: String,

    /// Output filename template for extracted CSS
    #[serde(default = "default_css_filename")]
    pub css_filename: String,

    /// Directory to resolve loader packages from; names are passed through
    /// unresolved when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_modules_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            served_path: default_served_path(),
            css_filename: default_css_filename(),
            node_modules_root: None,
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Served path with a guaranteed trailing slash
    ///
    /// A full URL keeps only its path component.
    pub fn served_path(&self) -> String {
        normalize_served_path(&self.served_path)
    }

    /// Derive the extraction policy from this config
    pub fn extraction_policy(&self) -> ExtractionPolicy {
        ExtractionPolicy::derive(&self.served_path(), &self.css_filename)
    }

    /// Resolver matching `node_modules_root`
    pub fn resolver(&self) -> Box<dyn ModuleResolver> {
        match &self.node_modules_root {
            Some(root) => Box::new(NodeModulesResolver::new(root)),
            None => Box::new(BareResolver),
        }
    }

    /// Build the registry with every built-in customizer
    pub fn build_registry(&self) -> crate::Result<Registry> {
        Registry::new(self.extraction_policy(), self.resolver())
    }
}

/// Normalize a public URL or path into a served path ending in `/`
pub fn normalize_served_path(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return default_served_path();
    }
    if value == "." || value == RELATIVE_ROOT {
        return RELATIVE_ROOT.to_string();
    }

    let path = match value.find("://") {
        Some(scheme_end) => {
            let rest = &value[scheme_end + 3..];
            rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
        }
        None => value,
    };

    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}
