//! arch-fit CLI tool.
//!
//! Usage:
//! ```bash
//! arch-fit check [OPTIONS] [PATH]
//! arch-fit list-rules
//! arch-fit init
//! ```

use anyhow::Result;
use arch_fit_rules::Preset;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Architecture fitness checks for layered modular monoliths
#[derive(Parser)]
#[command(name = "arch-fit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fitness checks
    Check {
        /// Project directory; relative search paths resolve against it
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Rule preset, ignored when --rules is given
        #[arg(long, default_value = "all")]
        preset: PresetArg,

        /// Root prefix of the checked system (overrides `scope.root_prefix`)
        #[arg(long, env = "ARCH_FIT_ROOT_PREFIX")]
        root_prefix: Option<String>,

        /// Manifest directory (can be specified multiple times, overrides
        /// `scope.search_paths`)
        #[arg(short, long = "search-path")]
        search_path: Vec<PathBuf>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check reports.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

/// Rule preset selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PresetArg {
    /// Every rule.
    All,
    /// Layering, building-block, module and library rules.
    Dependencies,
    /// Port, adapter and persistence-context rules.
    Structure,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::All => Self::All,
            PresetArg::Dependencies => Self::Dependencies,
            PresetArg::Structure => Self::Structure,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            preset,
            root_prefix,
            search_path,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                rules,
                preset: preset.into(),
                root_prefix,
                search_paths: search_path,
            };
            commands::check::run(&path, &source, &options)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
