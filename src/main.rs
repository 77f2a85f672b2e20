#![forbid(unsafe_code)]
//! Customizers Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use customizers::commands::{
    execute_assemble, execute_list, execute_policy, execute_resolve, AssembleOptions, ListOptions,
    PolicyOptions, ResolveOptions,
};
use customizers::config::CONFIG_FILE;
use customizers::{BuildMode, Config};

#[derive(Parser)]
#[command(name = "customizers")]
#[command(about = "Opt-in build customizers for front-end bundling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Path the built assets are served under (overrides config)
    #[arg(long, global = true, env = "PUBLIC_URL")]
    served_path: Option<String>,

    /// Output filename template for extracted CSS (overrides config)
    #[arg(long, global = true)]
    css_filename: Option<String>,

    /// Resolve loader packages from node_modules under this directory
    #[arg(long, global = true)]
    node_modules: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered customizers
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the CSS extraction policy
    Policy {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve one flag to its build fragment
    Resolve {
        /// Flag name (e.g. SASS, decorators)
        flag: String,

        /// Build mode (defaults to NODE_ENV)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Assemble build collections from enabled flags
    Assemble {
        /// Enabled flags, in order
        #[arg(required = true)]
        flags: Vec<String>,

        /// Build mode (defaults to NODE_ENV)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Build mode argument
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    #[value(alias = "development")]
    Dev,
    #[value(alias = "production")]
    Prod,
}

fn build_mode(arg: Option<ModeArg>) -> BuildMode {
    match arg {
        Some(ModeArg::Dev) => BuildMode::Development,
        Some(ModeArg::Prod) => BuildMode::Production,
        None => BuildMode::from_node_env(std::env::var("NODE_ENV").ok().as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "customizers=debug" } else { "customizers=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config
    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    if let Some(served_path) = cli.served_path {
        config.served_path = served_path;
    }
    if let Some(css_filename) = cli.css_filename {
        config.css_filename = css_filename;
    }
    if let Some(root) = cli.node_modules {
        config.node_modules_root = Some(root);
    }

    let registry = config.build_registry()?;

    match cli.command {
        Commands::List { json } => {
            execute_list(ListOptions { json }, &registry)?;
        }

        Commands::Policy { json } => {
            let options = PolicyOptions {
                served_path: config.served_path(),
                css_filename: config.css_filename.clone(),
                json,
            };
            execute_policy(options, &registry)?;
        }

        Commands::Resolve { flag, mode } => {
            let options = ResolveOptions {
                flag,
                mode: build_mode(mode),
            };
            execute_resolve(options, &registry)?;
        }

        Commands::Assemble { flags, mode, json } => {
            let options = AssembleOptions {
                flags,
                mode: build_mode(mode),
                json,
            };
            execute_assemble(options, &registry)?;
        }
    }

    Ok(())
}
