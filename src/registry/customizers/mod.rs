//! @acp:module "Built-in Customizers"
//! @acp:summary "Customizers for every built-in flag"
//! @acp:domain registry
//! @acp:layer service

mod babel;
mod css_modules;
mod stylesheet;

pub use babel::{DecoratorsCustomizer, Stage0Customizer};
pub use css_modules::CssModulesCustomizer;
pub use stylesheet::StylesheetCustomizer;

use super::customizer::Customizer;
use super::flag::Flag;
use crate::pipeline::Dialect;

/// Built-in customizer for `flag`
pub fn builtin(flag: Flag) -> Box<dyn Customizer> {
    match flag {
        Flag::BabelStage0 => Box::new(Stage0Customizer),
        Flag::Decorators => Box::new(DecoratorsCustomizer),
        Flag::Sass => Box::new(StylesheetCustomizer::new(Dialect::Sass)),
        Flag::Less => Box::new(StylesheetCustomizer::new(Dialect::Less)),
        Flag::Stylus => Box::new(StylesheetCustomizer::new(Dialect::Stylus)),
        Flag::CssModules => Box::new(CssModulesCustomizer),
    }
}
