#![forbid(unsafe_code)]

//! @acp:module "Customizers Library"
//! @acp:summary "Opt-in build customizers for a front-end bundling pipeline"
//! @acp:domain registry
//! @acp:layer api
//! @acp:stability stable
//!
//! # Customizers
//!
//! A declarative table mapping opt-in flags to build-rule fragments.
//!
//! ## Features
//!
//! - **Stylesheet dialects**: Sass/SCSS, Less and Stylus rules, inline in
//!   development and extracted to standalone files in production
//! - **Class transforms**: early-stage syntax preset and legacy decorators
//! - **Lazy resolution**: only the producer for the selected build mode runs
//! - **Relative public paths**: extracted CSS walks back to the build root
//!
//! ## Example
//!
//! ```rust,no_run
//! use customizers::{assemble, BuildMode, Config};
//!
//! fn main() -> customizers::Result<()> {
//!     let config = Config {
//!         served_path: "./".into(),
//!         ..Config::default()
//!     };
//!     let registry = config.build_registry()?;
//!
//!     let build = assemble(&registry, &["SASS", "DECORATORS"], BuildMode::Production)?;
//!     println!("{} rule(s)", build.rules.len());
//!
//!     Ok(())
//! }
//! ```

pub mod assemble;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod policy;
pub mod registry;
pub mod resolve;

// Re-exports
pub use assemble::{assemble, BuildConfig};
pub use config::Config;
pub use error::{CustomizerError, Result};
pub use pipeline::{Dialect, Pattern, Rule, StepKind, TransformStep};
pub use policy::ExtractionPolicy;
pub use registry::{
    BuildMode, Customizer, CustomizerDescriptor, Flag, Fragment, ProducerContext, Registry,
    TargetCollection,
};
pub use resolve::{BareResolver, ModuleReference, ModuleResolver, NodeModulesResolver, ResolveError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
