//! Preprocessor dialect customizers - generate module rules

use crate::pipeline::{Dialect, Pattern};
use crate::registry::customizer::{Customizer, Fragment, ProducerContext};
use crate::registry::flag::{Flag, TargetCollection};
use crate::resolve::ResolveError;

/// Rule customizer for one stylesheet dialect
pub struct StylesheetCustomizer {
    dialect: Dialect,
}

impl StylesheetCustomizer {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl Customizer for StylesheetCustomizer {
    fn flag(&self) -> Flag {
        match self.dialect {
            Dialect::Sass => Flag::Sass,
            Dialect::Less => Flag::Less,
            Dialect::Stylus => Flag::Stylus,
        }
    }

    fn target(&self) -> TargetCollection {
        TargetCollection::Rules
    }

    fn file_matcher(&self) -> Option<Pattern> {
        Some(self.dialect.pattern())
    }

    fn development(&self, ctx: &ProducerContext<'_>) -> Result<Fragment, ResolveError> {
        Ok(Fragment::Rule(self.dialect.development_rule(ctx.resolver)?))
    }

    fn production(&self, ctx: &ProducerContext<'_>) -> Result<Fragment, ResolveError> {
        Ok(Fragment::Rule(
            self.dialect.production_rule(ctx.resolver, ctx.policy)?,
        ))
    }
}
