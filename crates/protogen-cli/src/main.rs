//! protogen CLI - Runs generation passes over schema descriptors
//!
//! Commands:
//! - `protogen generate` - Write generated Go source for each schema file
//! - `protogen check` - Validate descriptors and configuration
//! - `protogen passes` - List the available passes

use clap::{Parser, Subcommand};
use protogen_logging::{LogLevel, init_logging};
use std::path::PathBuf;

mod check;
mod config;
mod generate;
mod registry;

#[derive(Parser)]
#[command(name = "protogen")]
#[command(author, version, about = "Generates Go source from protobuf schema descriptors", long_about = None)]
struct Cli {
    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source files from a descriptor set
    Generate {
        /// Descriptor set (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory, or `-` for stdout
        #[arg(short, long)]
        output: PathBuf,

        /// Path to protogen.toml (default: ./protogen.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a descriptor set and configuration without writing anything
    Check {
        /// Descriptor set (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Path to protogen.toml (default: ./protogen.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the available generation passes
    Passes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
        } => {
            let config = config::load(config.as_deref())?;
            config::apply_log_level(&config, cli.verbose)?;
            generate::run(&input, &output, &config)?;
        }
        Commands::Check { input, config } => {
            let config = config::load(config.as_deref())?;
            config::apply_log_level(&config, cli.verbose)?;
            check::run(&input, &config)?;
        }
        Commands::Passes => {
            for (name, description) in registry::available_passes() {
                println!("{name:<12} {description}");
            }
        }
    }

    Ok(())
}
