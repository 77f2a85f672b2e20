//! @acp:module "Module Resolution"
//! @acp:summary "Host-environment seam that locates loader and transform modules"
//! @acp:domain registry
//! @acp:layer io
//!
//! Customizers only name the modules they need. Whether those modules are
//! actually installed is decided by a [`ModuleResolver`], which is called
//! lazily from inside the producer that was selected for the build.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A module request together with the location the host resolved it to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleReference {
    /// Bare module name as written by the customizer
    pub request: String,
    /// Location reported by the resolver
    pub resolved: String,
}

impl ModuleReference {
    /// Reference that resolves to its own name
    pub fn bare(request: impl Into<String>) -> Self {
        let request = request.into();
        Self {
            resolved: request.clone(),
            request,
        }
    }
}

impl fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolved)
    }
}

/// The host could not locate a module
#[derive(Debug, Clone, Error)]
#[error("cannot find module '{request}'{}", searched_suffix(.searched))]
pub struct ResolveError {
    pub request: String,
    pub searched: Vec<PathBuf>,
}

fn searched_suffix(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        String::new()
    } else {
        let dirs: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
        format!(" (searched {})", dirs.join(", "))
    }
}

/// Resolves module requests the way the host build tool would
pub trait ModuleResolver: Send + Sync {
    /// Locate `request`, failing if the host cannot find it
    fn resolve(&self, request: &str) -> Result<ModuleReference, ResolveError>;
}

/// Resolver that trusts every name and leaves lookup to the bundler
#[derive(Debug, Default, Clone, Copy)]
pub struct BareResolver;

impl ModuleResolver for BareResolver {
    fn resolve(&self, request: &str) -> Result<ModuleReference, ResolveError> {
        Ok(ModuleReference::bare(request))
    }
}

/// Resolver that looks for installed packages in `node_modules` directories
///
/// Starting at `root`, each ancestor directory is checked for
/// `node_modules/<request>/package.json`; the first hit wins.
#[derive(Debug, Clone)]
pub struct NodeModulesResolver {
    root: PathBuf,
}

impl NodeModulesResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ModuleResolver for NodeModulesResolver {
    fn resolve(&self, request: &str) -> Result<ModuleReference, ResolveError> {
        let mut searched = Vec::new();

        for dir in self.root.ancestors() {
            let modules = dir.join("node_modules");
            let package = modules.join(request);
            if package.join("package.json").is_file() {
                tracing::debug!("Resolved {} to {}", request, package.display());
                return Ok(ModuleReference {
                    request: request.to_string(),
                    resolved: package.to_string_lossy().into_owned(),
                });
            }
            searched.push(modules);
        }

        Err(ResolveError {
            request: request.to_string(),
            searched,
        })
    }
}
