//! Registry integration tests
//!
//! End-to-end checks of registry construction, lookup and resolution.

use serde_json::Value;

use customizers::policy::{DEFAULT_CSS_FILENAME, PUBLIC_PATH_OPTION};
use customizers::{
    assemble, BareResolver, BuildMode, Config, CustomizerError, Dialect, ExtractionPolicy, Flag,
    Fragment, NodeModulesResolver, Registry, Rule, StepKind, TargetCollection, TransformStep,
};

fn registry_for(served_path: &str) -> Registry {
    let policy = ExtractionPolicy::derive(served_path, DEFAULT_CSS_FILENAME);
    Registry::new(policy, Box::new(BareResolver)).unwrap()
}

fn resolve_rule(registry: &Registry, flag: &str, mode: BuildMode) -> Rule {
    let descriptor = registry.lookup(flag).unwrap();
    match registry.resolve(descriptor, mode).unwrap() {
        Fragment::Rule(rule) => rule,
        other => panic!("expected rule for {}, got {:?}", flag, other),
    }
}

fn wrapper_options(rule: &Rule) -> &serde_json::Map<String, Value> {
    match &rule.chain[0] {
        TransformStep::ExtractionWrapper { options, .. } => options,
        other => panic!("expected extraction wrapper, got {:?}", other),
    }
}

// =============================================================================
// Extraction policy end to end
// =============================================================================

mod extraction_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_relative_served_path_rewrites_public_path() {
        let registry = registry_for("./");
        let rule = resolve_rule(&registry, "SASS", BuildMode::Production);

        assert_eq!(rule.chain[0].kind(), StepKind::ExtractionWrapper);
        assert_eq!(
            wrapper_options(&rule).get(PUBLIC_PATH_OPTION),
            Some(&Value::from("../../"))
        );
    }

    #[test]
    fn test_absolute_served_path_has_no_override() {
        let registry = registry_for("/app/");
        let rule = resolve_rule(&registry, "SASS", BuildMode::Production);

        assert_eq!(rule.chain[0].kind(), StepKind::ExtractionWrapper);
        assert!(wrapper_options(&rule).get(PUBLIC_PATH_OPTION).is_none());
    }

    #[test]
    fn test_every_dialect_shares_the_policy() {
        let registry = registry_for("./");
        for flag in ["SASS", "LESS", "STYLUS"] {
            let rule = resolve_rule(&registry, flag, BuildMode::Production);
            assert_eq!(
                wrapper_options(&rule)[PUBLIC_PATH_OPTION],
                Value::from("../../"),
                "{}",
                flag
            );
        }
    }

    #[test]
    fn test_config_homepage_dot_is_relative() {
        let config = Config {
            served_path: ".".into(),
            ..Config::default()
        };
        let registry = config.build_registry().unwrap();
        let rule = resolve_rule(&registry, "LESS", BuildMode::Production);

        assert_eq!(wrapper_options(&rule)[PUBLIC_PATH_OPTION], Value::from("../../"));
    }
}

// =============================================================================
// Rule symmetry and ordering
// =============================================================================

mod rule_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dev_and_prod_match_same_files() {
        let registry = registry_for("/");
        let files = [
            "src/App.scss",
            "src/App.sass",
            "src/App.less",
            "src/App.styl",
            "src/App.css",
            "src/App.js",
        ];

        for flag in ["SASS", "LESS", "STYLUS"] {
            let dev = resolve_rule(&registry, flag, BuildMode::Development);
            let prod = resolve_rule(&registry, flag, BuildMode::Production);
            for file in files {
                assert_eq!(dev.matches(file), prod.matches(file), "{} on {}", flag, file);
            }
        }
    }

    #[test]
    fn test_sass_matches_both_suffixes() {
        let registry = registry_for("/");
        for mode in [BuildMode::Development, BuildMode::Production] {
            let rule = resolve_rule(&registry, "SASS", mode);
            assert!(rule.matches("styles/main.scss"));
            assert!(rule.matches("styles/main.sass"));
            assert!(!rule.matches("styles/main.less"));
        }
    }

    #[test]
    fn test_descriptor_matcher_agrees_with_rule() {
        let registry = registry_for("/");
        for dialect in Dialect::all() {
            let descriptor = registry.lookup(&dialect.to_string()).unwrap();
            assert_eq!(descriptor.target(), TargetCollection::Rules);
            assert_eq!(descriptor.file_matcher(), Some(&dialect.pattern()));
        }
    }

    #[test]
    fn test_compiler_runs_first() {
        let registry = registry_for("/");

        let dev = resolve_rule(&registry, "STYLUS", BuildMode::Development);
        assert_eq!(
            dev.application_order(),
            vec!["stylus-loader", "postcss-loader", "css-loader", "style-loader"]
        );

        let prod = resolve_rule(&registry, "STYLUS", BuildMode::Production);
        assert_eq!(
            prod.application_order(),
            vec!["stylus-loader", "postcss-loader", "css-loader"]
        );
    }
}

// =============================================================================
// Lookup, class transforms and error paths
// =============================================================================

mod lookup_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_customizer() {
        let registry = registry_for("/");
        assert!(matches!(
            registry.lookup("nonexistent-flag"),
            Err(CustomizerError::UnknownCustomizer(_))
        ));
    }

    #[test]
    fn test_class_transforms_same_in_both_modes() {
        let registry = registry_for("/");
        for flag in [Flag::BabelStage0, Flag::Decorators] {
            let descriptor = registry.descriptor(flag).unwrap();
            let dev = registry.resolve(descriptor, BuildMode::Development).unwrap();
            let prod = registry.resolve(descriptor, BuildMode::Production).unwrap();
            assert_eq!(dev, prod);
            assert!(dev.as_module().is_some());
        }
    }

    #[test]
    fn test_class_transforms_only_yield_modules() {
        let registry = registry_for("/");
        let build = assemble(&registry, &["BABEL_STAGE_0", "DECORATORS"], BuildMode::Development).unwrap();

        assert_eq!(build.presets.len() + build.plugins.len(), 2);
        assert_eq!(build.rules.len(), 0);
        assert!(build.file_loader_exclusions.is_empty());
    }

    #[test]
    fn test_css_modules_differs_by_mode() {
        let registry = registry_for("/");
        let descriptor = registry.lookup("CSS_MODULES").unwrap();

        let dev = registry.resolve(descriptor, BuildMode::Development).unwrap();
        let prod = registry.resolve(descriptor, BuildMode::Production).unwrap();

        assert!(descriptor.file_matcher().is_none());
        assert!(dev.as_inline().unwrap().contains("localIdentName"));
        assert!(prod.as_inline().unwrap().contains("-autoprefixer"));
    }

    #[test]
    fn test_missing_module_names_the_flag() {
        let temp = TempDir::new().unwrap();
        let registry = Registry::new(
            ExtractionPolicy::absolute(),
            Box::new(NodeModulesResolver::new(temp.path())),
        )
        .unwrap();

        let descriptor = registry.lookup("DECORATORS").unwrap();
        let err = registry.resolve(descriptor, BuildMode::Development).unwrap_err();

        match err {
            CustomizerError::ModuleResolution { flag, source } => {
                assert_eq!(flag, Flag::Decorators);
                assert_eq!(source.request, "babel-plugin-transform-decorators-legacy");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_installed_modules_resolve_to_package_dirs() {
        let temp = TempDir::new().unwrap();
        for name in [
            "style-loader",
            "css-loader",
            "postcss-loader",
            "postcss-flexbugs-fixes",
            "autoprefixer",
            "less-loader",
        ] {
            let dir = temp.path().join("node_modules").join(name);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("package.json"), "{}").unwrap();
        }

        let registry = Registry::new(
            ExtractionPolicy::absolute(),
            Box::new(NodeModulesResolver::new(temp.path())),
        )
        .unwrap();

        let rule = resolve_rule(&registry, "LESS", BuildMode::Development);
        let TransformStep::LoaderReference { loader, .. } = &rule.chain[3] else {
            panic!("expected loader step");
        };
        assert_eq!(
            std::path::PathBuf::from(&loader.resolved),
            temp.path().join("node_modules").join("less-loader")
        );

        // Sass is not installed: only fails once actually resolved
        let sass = registry.lookup("SASS").unwrap();
        assert!(registry.resolve(sass, BuildMode::Development).is_err());
    }
}
