//! FLAMES Finder CLI
//!
//! Runs the FLAMES game for two names, prints the themed result and
//! logs each calculation to the configured stores.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use flames_finder::commands::{
    display_meanings, display_version, execute_calculate, validate_args, validate_result_file,
    CalculateArgs,
};
use flames_finder::utils::config::{load_config, AppConfig, API_KEY_ENV, BACKEND_URL_ENV};

/// FLAMES Finder - Friends, Love, Affection, Marriage, Enemy, Siblings
#[derive(Parser, Debug)]
#[command(name = "flames")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate the FLAMES result for two names
    Calculate {
        /// First name
        name1: String,

        /// Second name
        name2: String,

        /// Backend base URL for saving calculations
        #[arg(long, env = BACKEND_URL_ENV)]
        backend_url: Option<String>,

        /// Backend API key
        #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
        api_key: Option<String>,

        /// Backend table name
        #[arg(long)]
        table: Option<String>,

        /// Append each calculation to this JSON-lines file
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Don't save the calculation anywhere
        #[arg(long)]
        no_save: bool,

        /// Write a JSON result report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Print a share message after the result
        #[arg(long)]
        share: bool,
    },

    /// Show what each FLAMES letter stands for
    Meanings,

    /// Validate a result JSON file
    Validate {
        /// Path to result JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    // Execute command
    match cli.command {
        Commands::Calculate {
            name1,
            name2,
            backend_url,
            api_key,
            table,
            log_file,
            no_save,
            output,
            json,
            share,
        } => {
            // Flags and env vars win over the config file
            let mut backend = config.backend;
            if backend_url.is_some() {
                backend.url = backend_url;
            }
            if api_key.is_some() {
                backend.api_key = api_key;
            }
            if let Some(table) = table {
                backend.table = table;
            }

            let args = CalculateArgs {
                name1,
                name2,
                backend,
                log_file: log_file.or(config.log_file),
                no_save,
                output_json: output,
                print_json: json,
                share,
                share_url: config.share_url,
                policy: config.restricted,
            };

            // Validate args first
            validate_args(&args)?;

            execute_calculate(args)?;
        }

        Commands::Meanings => {
            display_meanings();
        }

        Commands::Validate { file } => {
            validate_result_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
