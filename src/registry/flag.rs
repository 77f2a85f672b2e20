//! @acp:module "Customizer Flags"
//! @acp:summary "Opt-in flag identifiers, target collections and build modes"
//! @acp:domain registry
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CustomizerError;

/// Opt-in customizer flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    #[serde(rename = "BABEL_STAGE_0")]
    BabelStage0,
    Decorators,
    Sass,
    Less,
    Stylus,
    CssModules,
}

impl Flag {
    /// Get all built-in flags in canonical order
    pub fn all() -> &'static [Flag] {
        &[
            Flag::BabelStage0,
            Flag::Decorators,
            Flag::Sass,
            Flag::Less,
            Flag::Stylus,
            Flag::CssModules,
        ]
    }

    /// Canonical flag name
    pub fn name(&self) -> &'static str {
        match self {
            Flag::BabelStage0 => "BABEL_STAGE_0",
            Flag::Decorators => "DECORATORS",
            Flag::Sass => "SASS",
            Flag::Less => "LESS",
            Flag::Stylus => "STYLUS",
            Flag::CssModules => "CSS_MODULES",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Flag::BabelStage0 => "Early-stage ECMAScript syntax preset",
            Flag::Decorators => "Legacy decorator syntax",
            Flag::Sass => "Sass/SCSS stylesheets",
            Flag::Less => "Less stylesheets",
            Flag::Stylus => "Stylus stylesheets",
            Flag::CssModules => "CSS Modules (unfinished)",
        }
    }

    /// Parse flag name from string
    ///
    /// Case-insensitive, `-` and `_` are interchangeable.
    pub fn from_name(name: &str) -> Option<Flag> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "babel_stage_0" | "stage_0" | "stage0" => Some(Flag::BabelStage0),
            "decorators" | "decorators_legacy" => Some(Flag::Decorators),
            "sass" | "scss" => Some(Flag::Sass),
            "less" => Some(Flag::Less),
            "stylus" | "styl" => Some(Flag::Stylus),
            "css_modules" | "cssmodules" => Some(Flag::CssModules),
            _ => None,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Flag {
    type Err = CustomizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::from_name(s).ok_or_else(|| CustomizerError::UnknownCustomizer(s.to_string()))
    }
}

/// Build collection a resolved fragment is appended to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetCollection {
    /// Compiler presets
    Presets,
    /// Compiler plugins
    Plugins,
    /// Module rules
    Rules,
    /// Raw loader configuration strings
    InlineConfig,
}

impl TargetCollection {
    pub fn name(&self) -> &'static str {
        match self {
            TargetCollection::Presets => "presets",
            TargetCollection::Plugins => "plugins",
            TargetCollection::Rules => "rules",
            TargetCollection::InlineConfig => "inline-config",
        }
    }
}

impl fmt::Display for TargetCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which producer a build selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Inline, fast, debuggable output
    #[default]
    Development,
    /// Extracted, minified, content-hashed output
    Production,
}

impl BuildMode {
    /// Mode implied by a `NODE_ENV`-style value
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("production") => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    pub fn from_name(name: &str) -> Option<BuildMode> {
        match name.trim().to_lowercase().as_str() {
            "dev" | "development" => Some(BuildMode::Development),
            "prod" | "production" => Some(BuildMode::Production),
            _ => None,
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_roundtrip() {
        for flag in Flag::all() {
            assert_eq!(Flag::from_name(flag.name()), Some(*flag));
        }
    }

    #[test]
    fn test_flag_from_name_aliases() {
        assert_eq!(Flag::from_name("stage-0"), Some(Flag::BabelStage0));
        assert_eq!(Flag::from_name("Css-Modules"), Some(Flag::CssModules));
        assert_eq!(Flag::from_name("scss"), Some(Flag::Sass));
        assert_eq!(Flag::from_name("nonexistent-flag"), None);
    }

    #[test]
    fn test_from_str_reports_unknown() {
        let err = "postcss".parse::<Flag>().unwrap_err();
        assert!(matches!(err, CustomizerError::UnknownCustomizer(ref n) if n == "postcss"));
    }

    #[test]
    fn test_flag_serializes_canonical_name() {
        assert_eq!(
            serde_json::to_string(&Flag::BabelStage0).unwrap(),
            "\"BABEL_STAGE_0\""
        );
        assert_eq!(serde_json::to_string(&Flag::CssModules).unwrap(), "\"CSS_MODULES\"");
        assert_eq!(
            serde_json::to_string(&TargetCollection::InlineConfig).unwrap(),
            "\"INLINE_CONFIG\""
        );
    }

    #[test]
    fn test_build_mode_from_node_env() {
        assert_eq!(BuildMode::from_node_env(Some("production")), BuildMode::Production);
        assert_eq!(BuildMode::from_node_env(Some("test")), BuildMode::Development);
        assert_eq!(BuildMode::from_node_env(None), BuildMode::Development);
    }

    #[test]
    fn test_build_mode_from_name() {
        assert_eq!(BuildMode::from_name("prod"), Some(BuildMode::Production));
        assert_eq!(BuildMode::from_name("Development"), Some(BuildMode::Development));
        assert_eq!(BuildMode::from_name("staging"), None);
    }
}
