//! CLI Adapter.

mod bind;
mod catalog;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SITEBIND_LOG";

#[derive(Parser)]
#[command(name = "sitebind")]
#[command(version)]
#[command(
    about = "Bind shop site configuration into static HTML pages",
    long_about = None
)]
struct Cli {
    /// Log binding details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the site configuration to a page or a directory of pages
    #[clap(visible_alias = "b")]
    Bind {
        /// HTML file or directory of pages
        input: PathBuf,
        /// Output file or directory (stdout for a file, in place for a directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Site settings file (defaults to ./site.toml when present)
        #[arg(short, long, conflicts_with = "record")]
        config: Option<PathBuf>,
        /// Raw SITE_CONFIG JSON record to apply instead of site settings
        #[arg(long)]
        record: Option<PathBuf>,
        /// Business name baked into the page titles
        #[arg(long)]
        template_name: Option<String>,
    },
    /// Print the SITE_CONFIG record derived from site settings
    #[clap(visible_alias = "cf")]
    Config {
        /// Site settings file (defaults to ./site.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format: json or js
        #[arg(short, long, default_value = "json")]
        format: String,
    },
    /// Export site catalog data as JSON
    #[clap(visible_alias = "ct")]
    Catalog {
        /// Section: services, featured, faqs, testimonials, or choices
        section: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Bind { input, output, config, record, template_name } => {
            bind::run_bind(bind::BindArgs { input, output, config, record, template_name })
        }
        Commands::Config { config, format } => config::run_config(config, &format),
        Commands::Catalog { section } => catalog::run_catalog(&section),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
