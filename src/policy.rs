//! @acp:module "Extraction Policy"
//! @acp:summary "Public path rewriting for CSS extracted into its own output file"
//! @acp:domain registry
//! @acp:layer model
//!
//! Extracted stylesheets are written below the build root (for example
//! `static/css/main.1a2b3c4d.css`). When the app is served from a relative
//! public path, `url(...)` references inside that file have to walk back up
//! to the build root before they can reach `static/media/...`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Served path that marks relative asset URLs
pub const RELATIVE_ROOT: &str = "./";

/// Default output filename template for extracted CSS
pub const DEFAULT_CSS_FILENAME: &str = "static/css/[name].[contenthash:8].css";

/// Option key merged into the extraction wrapper
pub const PUBLIC_PATH_OPTION: &str = "publicPath";

/// @acp:summary "How extracted CSS rewrites its asset URLs"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionPolicy {
    /// Whether the served path is the relative root marker
    pub public_path_is_relative: bool,
    /// `../` prefix leading from the CSS output directory to the build root
    pub rewritten_public_path: String,
}

impl ExtractionPolicy {
    /// Derive the policy from a served path and the CSS filename template
    pub fn derive(served_path: &str, css_filename: &str) -> Self {
        if served_path != RELATIVE_ROOT {
            return Self::absolute();
        }

        let segments = css_filename.split('/').count();
        Self {
            public_path_is_relative: true,
            rewritten_public_path: "../".repeat(segments - 1),
        }
    }

    /// Policy that leaves asset URLs untouched
    pub fn absolute() -> Self {
        Self {
            public_path_is_relative: false,
            rewritten_public_path: String::new(),
        }
    }

    /// Options merged into every extraction wrapper
    pub fn options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        if self.public_path_is_relative {
            options.insert(
                PUBLIC_PATH_OPTION.to_string(),
                Value::String(self.rewritten_public_path.clone()),
            );
        }
        options
    }
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self::absolute()
    }
}
