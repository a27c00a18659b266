//! Picfit CLI Binary
//!
//! Loads the service configuration exactly as the server does at startup. A load
//! failure is fatal: the diagnostic goes to stderr and the process exits with status 1.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use picfit::config::{Config, ConfigLoader};
use picfit::logging::init_logging;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

const REDACTED: &str = "********";

/// Picfit - image processing service configuration
#[derive(Parser)]
#[command(name = "picfit")]
#[command(about = "Load and inspect the picfit service configuration")]
struct Cli {
    /// Configuration file path (format inferred from the extension)
    #[arg(long, short = 'c', env = "PICFIT_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Inline JSON configuration
    #[arg(long, conflicts_with = "config")]
    content: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configuration and report success (default)
    Check,
    /// Print the resolved configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Print secrets instead of redacting them
        #[arg(long)]
        show_secrets: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Toml,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logger, config.debug) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(
        port = config.port,
        debug = config.debug,
        kvstore = %config.kv_store.kind,
        "Configuration loaded"
    );

    match run(cli.command.as_ref(), &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("{:#}", e);
            process::exit(1);
        }
    }
}

/// With neither a path nor inline content, only defaults and environment apply.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let loader = ConfigLoader::new();

    if let Some(ref content) = cli.content {
        return loader
            .load_from_content(content)
            .context("invalid inline configuration");
    }

    match cli.config {
        Some(ref path) => loader
            .load(path)
            .with_context(|| format!("cannot load {}", path.display())),
        None => loader
            .load_from_content("{}")
            .context("invalid environment configuration"),
    }
}

fn run(command: Option<&Commands>, config: &Config) -> anyhow::Result<String> {
    match command {
        None | Some(Commands::Check) => Ok("ok".to_string()),
        Some(Commands::Show {
            format,
            show_secrets,
        }) => render(config, *format, *show_secrets),
    }
}

fn render(config: &Config, format: OutputFormat, show_secrets: bool) -> anyhow::Result<String> {
    let mut config = config.clone();
    if !show_secrets {
        redact(&mut config);
    }

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&config).context("cannot render configuration as JSON")
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(&config).context("cannot render configuration as TOML")
        }
    }
}

fn redact(config: &mut Config) {
    fn mask(value: &mut String) {
        if !value.is_empty() {
            *value = REDACTED.to_string();
        }
    }

    mask(&mut config.secret_key);
    if let Some(ref mut sentry) = config.sentry {
        mask(&mut sentry.dsn);
    }
    for backend in [&mut config.storage.source, &mut config.storage.destination]
        .into_iter()
        .flatten()
    {
        mask(&mut backend.secret_access_key);
    }
    if let Some(ref mut redis) = config.kv_store.redis {
        mask(&mut redis.password);
    }
}
