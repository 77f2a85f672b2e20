//! Class-transform extensions: compiler presets and plugins

use crate::registry::customizer::{Customizer, Fragment, ProducerContext};
use crate::registry::flag::{Flag, TargetCollection};
use crate::resolve::ResolveError;

pub const STAGE_0_PRESET: &str = "babel-preset-stage-0";
pub const DECORATORS_PLUGIN: &str = "babel-plugin-transform-decorators-legacy";

/// Early-stage syntax preset - appended to the compiler presets
pub struct Stage0Customizer;

impl Customizer for Stage0Customizer {
    fn flag(&self) -> Flag {
        Flag::BabelStage0
    }

    fn target(&self) -> TargetCollection {
        TargetCollection::Presets
    }

    fn development(&self, ctx: &ProducerContext<'_>) -> Result<Fragment, ResolveError> {
        Ok(Fragment::Module(ctx.resolver.resolve(STAGE_0_PRESET)?))
    }
}

/// Legacy decorator transform - appended to the compiler plugins
pub struct DecoratorsCustomizer;

impl Customizer for DecoratorsCustomizer {
    fn flag(&self) -> Flag {
        Flag::Decorators
    }

    fn target(&self) -> TargetCollection {
        TargetCollection::Plugins
    }

    fn development(&self, ctx: &ProducerContext<'_>) -> Result<Fragment, ResolveError> {
        Ok(Fragment::Module(ctx.resolver.resolve(DECORATORS_PLUGIN)?))
    }
}
