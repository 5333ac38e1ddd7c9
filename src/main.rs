//! Marketcart - Persistent Shopping Cart CLI
//!
//! Entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use marketcart::cli::{Cli, Commands};
use marketcart::config::{Config, ConfigManager};
use marketcart::error::CartResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CartResult<()> {
    let cli = Cli::parse();

    // Load configuration before logging is up; the config layer's own
    // trace output for this load is dropped
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let config = config_manager.load().await?;
    init_logging(&cli, &config);

    // The cart subcommands share one store, threaded through the
    // context; config management does not need it
    match cli.command {
        Commands::Config(args) => {
            marketcart::cli::commands::config(args, &config, &config_manager).await
        }
        command => {
            let ctx = marketcart::cli::commands::open_context(&config, cli.ephemeral).await?;
            match command {
                Commands::Show(args) => {
                    marketcart::cli::commands::show(args, &ctx, &config).await
                }
                Commands::Add(args) => marketcart::cli::commands::add(args, &ctx, &config).await,
                Commands::Increment(args) => {
                    marketcart::cli::commands::increment(args, &ctx, &config).await
                }
                Commands::Decrement(args) => {
                    marketcart::cli::commands::decrement(args, &ctx, &config).await
                }
                Commands::Clear => marketcart::cli::commands::clear(&ctx, &config).await,
                Commands::Config(_) => unreachable!("Config handled above"),
            }
        }
    }
}

/// Initialize logging: -v flags override the config's verbose setting
/// (0 = warn, 1 = info, 2+ = debug)
fn init_logging(cli: &Cli, config: &Config) {
    let filter = match cli.verbose {
        0 if config.general.verbose => EnvFilter::new("marketcart=info"),
        0 => EnvFilter::new("marketcart=warn"),
        1 => EnvFilter::new("marketcart=info"),
        _ => EnvFilter::new("marketcart=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
