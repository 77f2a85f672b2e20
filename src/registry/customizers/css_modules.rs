//! CSS Modules customizer
//!
//! Still unfinished: each mode carries one combined loader string instead of
//! a structured rule, and no module lookups happen.

use crate::registry::customizer::{Customizer, Fragment, ProducerContext};
use crate::registry::flag::{Flag, TargetCollection};
use crate::resolve::ResolveError;

pub const DEVELOPMENT_CONFIG: &str = "style!css?modules&camelCase&importLoaders=1&localIdentName=[name]__[local]___[hash:base64:5]!postcss";
pub const PRODUCTION_CONFIG: &str = "style!css?modules&camelCase&-autoprefixer&importLoaders=1!postcss";

pub struct CssModulesCustomizer;

impl Customizer for CssModulesCustomizer {
    fn flag(&self) -> Flag {
        Flag::CssModules
    }

    fn target(&self) -> TargetCollection {
        TargetCollection::InlineConfig
    }

    fn development(&self, _ctx: &ProducerContext<'_>) -> Result<Fragment, ResolveError> {
        Ok(Fragment::Inline(DEVELOPMENT_CONFIG.to_string()))
    }

    fn production(&self, _ctx: &ProducerContext<'_>) -> Result<Fragment, ResolveError> {
        Ok(Fragment::Inline(PRODUCTION_CONFIG.to_string()))
    }
}
