//! @acp:module "Stylesheet Dialects"
//! @acp:summary "Development and production rule templates per preprocessor dialect"
//! @acp:domain registry
//! @acp:layer service

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{steps, Pattern, Rule, TransformStep};
use crate::policy::ExtractionPolicy;
use crate::resolve::{ModuleResolver, ResolveError};

static SASS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(scss|sass)$").unwrap());
static LESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.less$").unwrap());
static STYLUS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.styl$").unwrap());

/// CSS preprocessor syntaxes with a rule template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Sass,
    Less,
    Stylus,
}

impl Dialect {
    pub fn all() -> &'static [Dialect] {
        &[Dialect::Sass, Dialect::Less, Dialect::Stylus]
    }

    /// Loader that compiles this dialect to CSS
    pub fn compiler(&self) -> &'static str {
        match self {
            Dialect::Sass => "sass-loader",
            Dialect::Less => "less-loader",
            Dialect::Stylus => "stylus-loader",
        }
    }

    /// File extensions handled by this dialect
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Dialect::Sass => &["scss", "sass"],
            Dialect::Less => &["less"],
            Dialect::Stylus => &["styl"],
        }
    }

    /// Pattern shared by the development and production rules
    pub fn pattern(&self) -> Pattern {
        let regex = match self {
            Dialect::Sass => &*SASS_PATTERN,
            Dialect::Less => &*LESS_PATTERN,
            Dialect::Stylus => &*STYLUS_PATTERN,
        };
        Pattern::from(regex.clone())
    }

    /// Inline rule: inject -> css -> postcss -> compiler
    ///
    /// Every dialect, Stylus included, uses the plain development `css-loader`.
    pub fn development_rule(&self, resolver: &dyn ModuleResolver) -> Result<Rule, ResolveError> {
        Ok(Rule {
            test: self.pattern(),
            chain: vec![
                steps::inject(resolver)?,
                steps::css(resolver)?,
                steps::postcss(resolver)?,
                TransformStep::loader(resolver.resolve(self.compiler())?),
            ],
        })
    }

    /// Extracted rule: the production chain wrapped so its output lands in
    /// a standalone stylesheet, with the policy's options merged in
    pub fn production_rule(
        &self,
        resolver: &dyn ModuleResolver,
        policy: &ExtractionPolicy,
    ) -> Result<Rule, ResolveError> {
        let wrapper = TransformStep::ExtractionWrapper {
            fallback: Box::new(steps::inject(resolver)?),
            chain: vec![
                steps::css_production(resolver)?,
                steps::postcss(resolver)?,
                TransformStep::loader(resolver.resolve(self.compiler())?),
            ],
            options: policy.options(),
        };

        Ok(Rule {
            test: self.pattern(),
            chain: vec![wrapper],
        })
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Sass => write!(f, "sass"),
            Dialect::Less => write!(f, "less"),
            Dialect::Stylus => write!(f, "stylus"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::StepKind;
    use crate::policy::{DEFAULT_CSS_FILENAME, PUBLIC_PATH_OPTION};
    use crate::resolve::BareResolver;

    #[test]
    fn test_patterns_match_every_extension() {
        for dialect in Dialect::all() {
            let pattern = dialect.pattern();
            for ext in dialect.extensions() {
                let file = format!("src/App.{}", ext);
                assert!(pattern.is_match(&file), "{} should match {}", dialect, file);
            }
            assert!(!pattern.is_match("src/App.css"));
            assert!(!pattern.is_match("src/App.js"));
        }
    }

    #[test]
    fn test_patterns_are_anchored() {
        assert!(!Dialect::Sass.pattern().is_match("src/App.scss.js"));
        assert!(!Dialect::Less.pattern().is_match("src/App.less.map"));
        assert!(!Dialect::Stylus.pattern().is_match("src/App.stylus"));
    }

    #[test]
    fn test_development_chain() {
        let rule = Dialect::Less.development_rule(&BareResolver).unwrap();
        let loaders: Vec<_> = rule.chain.iter().filter_map(|s| s.loader_request()).collect();

        assert_eq!(
            loaders,
            vec!["style-loader", "css-loader", "postcss-loader", "less-loader"]
        );
    }

    #[test]
    fn test_stylus_development_uses_plain_css_step() {
        let rule = Dialect::Stylus.development_rule(&BareResolver).unwrap();
        assert_eq!(rule.chain[1].loader_request(), Some("css-loader"));
        assert!(rule.chain[1].options().is_empty());
    }

    #[test]
    fn test_production_chain() {
        let policy = ExtractionPolicy::derive("./", DEFAULT_CSS_FILENAME);
        let rule = Dialect::Stylus.production_rule(&BareResolver, &policy).unwrap();

        assert_eq!(rule.chain.len(), 1);
        assert_eq!(rule.chain[0].kind(), StepKind::ExtractionWrapper);

        let TransformStep::ExtractionWrapper { fallback, chain, options } = &rule.chain[0] else {
            panic!("expected extraction wrapper");
        };
        assert_eq!(fallback.loader_request(), Some("style-loader"));
        let loaders: Vec<_> = chain.iter().filter_map(|s| s.loader_request()).collect();
        assert_eq!(loaders, vec!["css-loader", "postcss-loader", "stylus-loader"]);
        assert_eq!(chain[0].options()["minimize"], true);
        assert_eq!(options[PUBLIC_PATH_OPTION], "../../");
    }

    #[test]
    fn test_dev_and_prod_share_pattern() {
        let policy = ExtractionPolicy::absolute();
        for dialect in Dialect::all() {
            let dev = dialect.development_rule(&BareResolver).unwrap();
            let prod = dialect.production_rule(&BareResolver, &policy).unwrap();
            assert_eq!(dev.test, prod.test);
        }
    }
}
