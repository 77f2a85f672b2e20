//! @acp:module "Customizer Trait"
//! @acp:summary "Producer trait, descriptors and resolved fragments"
//! @acp:domain registry
//! @acp:layer service

use serde::{Deserialize, Serialize};

use super::flag::{BuildMode, Flag, TargetCollection};
use crate::error::{CustomizerError, Result};
use crate::pipeline::{Pattern, Rule};
use crate::policy::ExtractionPolicy;
use crate::resolve::{ModuleReference, ModuleResolver, ResolveError};

/// Resolved value of one flag in one build mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Fragment {
    /// Preset or plugin module reference
    Module(ModuleReference),
    /// Module rule
    Rule(Rule),
    /// Raw loader configuration string
    Inline(String),
}

impl Fragment {
    pub fn as_module(&self) -> Option<&ModuleReference> {
        match self {
            Fragment::Module(module) => Some(module),
            _ => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Fragment::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_inline(&self) -> Option<&str> {
        match self {
            Fragment::Inline(config) => Some(config),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Fragment::Module(_) => "module",
            Fragment::Rule(_) => "rule",
            Fragment::Inline(_) => "inline",
        }
    }

    /// Whether this fragment can be appended to `target`
    pub fn fits(&self, target: TargetCollection) -> bool {
        matches!(
            (target, self),
            (TargetCollection::Presets | TargetCollection::Plugins, Fragment::Module(_))
                | (TargetCollection::Rules, Fragment::Rule(_))
                | (TargetCollection::InlineConfig, Fragment::Inline(_))
        )
    }
}

/// Everything a producer may consult while building its fragment
pub struct ProducerContext<'a> {
    pub policy: &'a ExtractionPolicy,
    pub resolver: &'a dyn ModuleResolver,
}

/// Customizer trait - implement for each supported flag
///
/// Producers are only called on demand, so module lookups made by the
/// production variant never run during a development build and vice versa.
pub trait Customizer: Send + Sync {
    /// Get the flag identifier
    fn flag(&self) -> Flag;

    /// Collection the fragment is appended to
    fn target(&self) -> TargetCollection;

    /// Files the fragment applies to (rule customizers only)
    fn file_matcher(&self) -> Option<Pattern> {
        None
    }

    /// Produce the development fragment
    fn development(&self, ctx: &ProducerContext<'_>) -> std::result::Result<Fragment, ResolveError>;

    /// Produce the production fragment
    ///
    /// Customizers that do not vary by mode keep this default.
    fn production(&self, ctx: &ProducerContext<'_>) -> std::result::Result<Fragment, ResolveError> {
        self.development(ctx)
    }
}

/// Registry entry for one flag
pub struct CustomizerDescriptor {
    flag: Flag,
    target: TargetCollection,
    file_matcher: Option<Pattern>,
    producer: Box<dyn Customizer>,
}

impl CustomizerDescriptor {
    /// Wrap a customizer, checking that a matcher is present exactly for rules
    pub fn new(producer: Box<dyn Customizer>) -> Result<Self> {
        let flag = producer.flag();
        let target = producer.target();
        let file_matcher = producer.file_matcher();

        match (target, &file_matcher) {
            (TargetCollection::Rules, None) => {
                return Err(CustomizerError::malformed(
                    flag,
                    "rule customizer has no file matcher",
                ));
            }
            (TargetCollection::Rules, Some(_)) | (_, None) => {}
            (other, Some(_)) => {
                return Err(CustomizerError::malformed(
                    flag,
                    format!("{} customizer must not declare a file matcher", other),
                ));
            }
        }

        Ok(Self {
            flag,
            target,
            file_matcher,
            producer,
        })
    }

    pub fn flag(&self) -> Flag {
        self.flag
    }

    pub fn target(&self) -> TargetCollection {
        self.target
    }

    pub fn file_matcher(&self) -> Option<&Pattern> {
        self.file_matcher.as_ref()
    }

    /// Invoke exactly one producer for `mode`
    ///
    /// The fragment must fit the descriptor's target collection.
    pub(crate) fn produce(&self, mode: BuildMode, ctx: &ProducerContext<'_>) -> Result<Fragment> {
        let produced = match mode {
            BuildMode::Development => self.producer.development(ctx),
            BuildMode::Production => self.producer.production(ctx),
        };

        let fragment = produced.map_err(|source| CustomizerError::ModuleResolution {
            flag: self.flag,
            source,
        })?;

        if !fragment.fits(self.target) {
            return Err(self.mismatched(&fragment));
        }
        Ok(fragment)
    }

    pub(crate) fn mismatched(&self, fragment: &Fragment) -> CustomizerError {
        CustomizerError::MismatchedFragment {
            flag: self.flag,
            target: self.target,
            produced: fragment.kind_name(),
        }
    }
}

impl std::fmt::Debug for CustomizerDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomizerDescriptor")
            .field("flag", &self.flag)
            .field("target", &self.target)
            .field("file_matcher", &self.file_matcher)
            .finish_non_exhaustive()
    }
}
