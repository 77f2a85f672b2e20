//! @acp:module "Pipeline Templates"
//! @acp:summary "Rule and transform step types plus per-dialect chain templates"
//! @acp:domain registry
//! @acp:layer model
//!
//! A [`Rule`] pairs a file pattern with an ordered chain of [`TransformStep`]s.
//! Chains are applied right to left: the last step sees the source file first
//! and hands its output to the step before it.

pub mod dialect;
pub mod steps;

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::resolve::ModuleReference;

pub use dialect::Dialect;

/// File pattern a rule applies to
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern(regex)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// Kind tag of a transform step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    LoaderReference,
    ExtractionWrapper,
}

/// One step of a transform chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransformStep {
    /// A loader module applied to the file contents
    LoaderReference {
        loader: ModuleReference,
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        options: Map<String, Value>,
    },
    /// Pulls the output of `chain` into a standalone file
    ///
    /// `fallback` is used when extraction is impossible, e.g. for modules
    /// loaded outside the main chunk.
    ExtractionWrapper {
        fallback: Box<TransformStep>,
        chain: Vec<TransformStep>,
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        options: Map<String, Value>,
    },
}

impl TransformStep {
    /// Loader step without options
    pub fn loader(loader: ModuleReference) -> Self {
        TransformStep::LoaderReference {
            loader,
            options: Map::new(),
        }
    }

    pub fn loader_with(loader: ModuleReference, options: Map<String, Value>) -> Self {
        TransformStep::LoaderReference { loader, options }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            TransformStep::LoaderReference { .. } => StepKind::LoaderReference,
            TransformStep::ExtractionWrapper { .. } => StepKind::ExtractionWrapper,
        }
    }

    pub fn options(&self) -> &Map<String, Value> {
        match self {
            TransformStep::LoaderReference { options, .. } => options,
            TransformStep::ExtractionWrapper { options, .. } => options,
        }
    }

    /// Module request of a loader step
    pub fn loader_request(&self) -> Option<&str> {
        match self {
            TransformStep::LoaderReference { loader, .. } => Some(&loader.request),
            TransformStep::ExtractionWrapper { .. } => None,
        }
    }
}

/// A module rule: file pattern plus transform chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub test: Pattern,
    #[serde(rename = "use")]
    pub chain: Vec<TransformStep>,
}

impl Rule {
    /// Whether this rule processes `path`
    pub fn matches(&self, path: &str) -> bool {
        self.test.is_match(path)
    }

    /// Loader requests in application order (innermost first)
    ///
    /// Extraction wrappers are flattened into their wrapped chain.
    pub fn application_order(&self) -> Vec<&str> {
        fn walk<'a>(chain: &'a [TransformStep], out: &mut Vec<&'a str>) {
            for step in chain.iter().rev() {
                match step {
                    TransformStep::LoaderReference { loader, .. } => out.push(&loader.request),
                    TransformStep::ExtractionWrapper { chain, .. } => walk(chain, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.chain, &mut out);
        out
    }
}
