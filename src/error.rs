//! @acp:module "Errors"
//! @acp:summary "Error taxonomy for registry construction and fragment resolution"
//! @acp:domain registry
//! @acp:layer model

use thiserror::Error;

use crate::registry::{Flag, TargetCollection};
use crate::resolve::ResolveError;

/// Errors raised while building or querying the customizer registry
#[derive(Debug, Error)]
pub enum CustomizerError {
    /// The flag name has no registry entry
    #[error("unknown customizer: {0}")]
    UnknownCustomizer(String),

    /// A module referenced by a customizer could not be located by the host
    #[error("customizer {flag} could not resolve module: {source}")]
    ModuleResolution {
        flag: Flag,
        #[source]
        source: ResolveError,
    },

    /// A descriptor violates a registry invariant
    #[error("malformed descriptor for {flag}: {reason}")]
    MalformedDescriptor { flag: Flag, reason: String },

    /// A producer returned a fragment its target collection cannot hold
    #[error("customizer {flag} produced a {produced} fragment for the {target} collection")]
    MismatchedFragment {
        flag: Flag,
        target: TargetCollection,
        produced: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CustomizerError {
    pub(crate) fn malformed(flag: Flag, reason: impl Into<String>) -> Self {
        CustomizerError::MalformedDescriptor {
            flag,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CustomizerError>;
