//! CLI Adapter.

mod generate;
mod remap;
mod services;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::app::logging::{LoggingConfig, init_logging, parse_level};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "svcgen")]
#[command(version)]
#[command(
    about = "Scaffold Kitura cloud services and their credential mappings",
    long_about = None
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides SVCGEN_LOG
    #[arg(long, global = true, value_parser = parse_level_arg)]
    log_level: Option<Level>,
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate service sources, READMEs and credential mappings
    #[clap(visible_alias = "g")]
    Generate {
        /// Service configuration JSON (reads stdin when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        dest: Option<PathBuf>,
        /// Run without a parent context
        #[arg(long)]
        standalone: bool,
        /// Print the generation report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Regroup an existing flat config/localdev-config.json and write mappings
    Remap {
        /// Service configuration JSON (reads stdin when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },
    /// List supported services and their credential prefixes
    #[clap(visible_alias = "ls")]
    Services,
}

fn parse_level_arg(value: &str) -> Result<Level, String> {
    parse_level(value).ok_or_else(|| format!("unknown log level '{}'", value))
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let project_root = match &cli.command {
        Commands::Generate { dest: Some(dest), .. } | Commands::Remap { dest: Some(dest), .. } => {
            Some(dest.clone())
        }
        _ => std::env::current_dir().ok(),
    };
    init_logging(LoggingConfig {
        level: cli.log_level.or_else(|| configured_level(project_root)),
        use_json: cli.log_json,
    });

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { config, dest, standalone, json } => {
            generate::run_generate(config, dest, standalone, json)
        }
        Commands::Remap { config, dest } => remap::run_remap(config, dest),
        Commands::Services => services::run_services(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `log_level` from `.svcgen.toml`; configuration errors surface later in the command.
fn configured_level(project_root: Option<PathBuf>) -> Option<Level> {
    let config = crate::app::api::generator_config_at(project_root?).ok()?;
    config.log_level.as_deref().and_then(parse_level)
}
