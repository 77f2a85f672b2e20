//! @acp:module "Shared Transform Steps"
//! @acp:summary "Loader steps reused by every stylesheet dialect"
//! @acp:domain registry
//! @acp:layer service

use serde_json::{json, Map, Value};

use super::TransformStep;
use crate::resolve::{ModuleResolver, ResolveError};

pub const STYLE_LOADER: &str = "style-loader";
pub const CSS_LOADER: &str = "css-loader";
pub const POSTCSS_LOADER: &str = "postcss-loader";
pub const FLEXBUGS_FIXES: &str = "postcss-flexbugs-fixes";
pub const AUTOPREFIXER: &str = "autoprefixer";

/// Browser targets handed to autoprefixer
pub const BROWSERS: &[&str] = &[
    ">1%",
    "last 4 versions",
    "Firefox ESR",
    "not ie < 9",
];

/// Injects the compiled CSS into the DOM at runtime
pub fn inject(resolver: &dyn ModuleResolver) -> Result<TransformStep, ResolveError> {
    Ok(TransformStep::loader(resolver.resolve(STYLE_LOADER)?))
}

/// Interprets `@import` and `url()` as module requests
pub fn css(resolver: &dyn ModuleResolver) -> Result<TransformStep, ResolveError> {
    Ok(TransformStep::loader(resolver.resolve(CSS_LOADER)?))
}

/// Production variant of [`css`]: minified, with source maps
///
/// `importLoaders: 1` makes `@import`ed files pass through the vendor
/// prefixing step as well.
pub fn css_production(resolver: &dyn ModuleResolver) -> Result<TransformStep, ResolveError> {
    let mut options = Map::new();
    options.insert("importLoaders".into(), Value::from(1));
    options.insert("minimize".into(), Value::Bool(true));
    options.insert("sourceMap".into(), Value::Bool(true));

    Ok(TransformStep::loader_with(resolver.resolve(CSS_LOADER)?, options))
}

/// Vendor prefixing and flexbox bug fixes
pub fn postcss(resolver: &dyn ModuleResolver) -> Result<TransformStep, ResolveError> {
    let loader = resolver.resolve(POSTCSS_LOADER)?;
    let flexbugs = resolver.resolve(FLEXBUGS_FIXES)?;
    let autoprefixer = resolver.resolve(AUTOPREFIXER)?;

    let mut options = Map::new();
    options.insert("ident".into(), Value::from("postcss"));
    options.insert(
        "plugins".into(),
        json!([
            { "plugin": flexbugs },
            {
                "plugin": autoprefixer,
                "options": {
                    "browsers": BROWSERS,
                    "flexbox": "no-2009",
                },
            },
        ]),
    );

    Ok(TransformStep::loader_with(loader, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::BareResolver;

    #[test]
    fn test_production_css_options() {
        let step = css_production(&BareResolver).unwrap();
        let options = step.options();

        assert_eq!(step.loader_request(), Some(CSS_LOADER));
        assert_eq!(options["importLoaders"], 1);
        assert_eq!(options["minimize"], true);
        assert_eq!(options["sourceMap"], true);
    }

    #[test]
    fn test_development_css_has_no_options() {
        let step = css(&BareResolver).unwrap();
        assert!(step.options().is_empty());
    }

    #[test]
    fn test_postcss_plugins_in_order() {
        let step = postcss(&BareResolver).unwrap();
        let options = step.options();
        let plugins = options["plugins"].as_array().unwrap();

        assert_eq!(options["ident"], "postcss");
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0]["plugin"]["request"], FLEXBUGS_FIXES);
        assert_eq!(plugins[1]["plugin"]["request"], AUTOPREFIXER);
        assert_eq!(plugins[1]["options"]["flexbox"], "no-2009");
        assert_eq!(plugins[1]["options"]["browsers"][3], "not ie < 9");
    }
}
