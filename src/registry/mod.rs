//! @acp:module "Customizer Registry"
//! @acp:summary "Immutable flag -> descriptor table with lazy fragment resolution"
//! @acp:domain registry
//! @acp:layer service
//!
//! ## Overview
//!
//! The registry maps each opt-in flag to a [`CustomizerDescriptor`]. A build
//! assembler looks a flag up, asks the registry to resolve it for the current
//! [`BuildMode`], and appends the fragment to the collection the descriptor
//! names.
//!
//! ## Built-in Flags
//!
//! - `BABEL_STAGE_0` (presets)
//! - `DECORATORS` (plugins)
//! - `SASS`, `LESS`, `STYLUS` (rules)
//! - `CSS_MODULES` (inline config, unfinished)
//!
//! The table is built once and never mutated, so it can be shared by
//! reference without synchronization.

pub mod customizer;
pub mod customizers;
pub mod flag;

use std::collections::HashMap;

pub use customizer::{Customizer, CustomizerDescriptor, Fragment, ProducerContext};
pub use flag::{BuildMode, Flag, TargetCollection};

use crate::error::{CustomizerError, Result};
use crate::policy::ExtractionPolicy;
use crate::resolve::ModuleResolver;

/// Flag -> descriptor table plus the inputs every producer needs
pub struct Registry {
    descriptors: HashMap<Flag, CustomizerDescriptor>,
    policy: ExtractionPolicy,
    resolver: Box<dyn ModuleResolver>,
}

impl Registry {
    /// Create a registry with all built-in customizers
    pub fn new(policy: ExtractionPolicy, resolver: Box<dyn ModuleResolver>) -> Result<Self> {
        let builtins = Flag::all().iter().map(|flag| customizers::builtin(*flag));
        Self::with_customizers(policy, resolver, builtins)
    }

    /// Create a registry from an explicit set of customizers
    pub fn with_customizers<I>(
        policy: ExtractionPolicy,
        resolver: Box<dyn ModuleResolver>,
        customizers: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Box<dyn Customizer>>,
    {
        let mut descriptors = HashMap::new();

        for customizer in customizers {
            let descriptor = CustomizerDescriptor::new(customizer)?;
            let flag = descriptor.flag();
            if descriptors.insert(flag, descriptor).is_some() {
                return Err(CustomizerError::malformed(flag, "flag registered twice"));
            }
        }

        tracing::debug!(
            "Registry built with {} customizers (relative public path: {})",
            descriptors.len(),
            policy.public_path_is_relative
        );

        Ok(Self {
            descriptors,
            policy,
            resolver,
        })
    }

    /// Look up a flag by name
    pub fn lookup(&self, name: &str) -> Result<&CustomizerDescriptor> {
        let flag = Flag::from_name(name)
            .ok_or_else(|| CustomizerError::UnknownCustomizer(name.to_string()))?;

        self.descriptors
            .get(&flag)
            .ok_or_else(|| CustomizerError::UnknownCustomizer(name.to_string()))
    }

    /// Get the descriptor registered for `flag`
    pub fn descriptor(&self, flag: Flag) -> Result<&CustomizerDescriptor> {
        self.descriptors
            .get(&flag)
            .ok_or_else(|| CustomizerError::UnknownCustomizer(flag.name().to_string()))
    }

    /// Resolve a descriptor for `mode`, invoking only that mode's producer
    pub fn resolve(&self, descriptor: &CustomizerDescriptor, mode: BuildMode) -> Result<Fragment> {
        tracing::debug!("Resolving {} for {}", descriptor.flag(), mode);

        let ctx = ProducerContext {
            policy: &self.policy,
            resolver: self.resolver.as_ref(),
        };
        descriptor.produce(mode, &ctx)
    }

    /// Registered flags in canonical order
    pub fn flags(&self) -> Vec<Flag> {
        let mut flags: Vec<Flag> = self.descriptors.keys().copied().collect();
        flags.sort();
        flags
    }

    pub fn policy(&self) -> &ExtractionPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("flags", &self.flags())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
