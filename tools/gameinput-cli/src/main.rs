//! GameInput CLI - Inspect how connected controllers are resolved
//!
//! # Commands
//!
//! - `gameinput watch` - Poll gamepads, log reshuffles and button edges
//!   (the keyboard player is listed but receives no key events)
//! - `gameinput models` - List the built-in device catalog and keyboard presets
//! - `gameinput config` - Print the effective input configuration
//!
//! Log verbosity follows `RUST_LOG` (default `info`). `RUST_LOG=trace` shows
//! every edge event as the core sees it.

mod models;
mod watch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gameinput_core::InputConfig;
use gameinput_core::config;

/// GameInput CLI - Controller identity and schema resolution
#[derive(Parser)]
#[command(name = "gameinput")]
#[command(about = "Inspect how connected controllers are resolved")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll gamepads and log reshuffles and button events
    ///
    /// A terminal delivers no key transitions, so the keyboard player shows
    /// up in the roster but never produces button events.
    Watch(watch::WatchArgs),

    /// List built-in device models and keyboard presets
    Models,

    /// Print the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the config command
#[derive(Args)]
struct ConfigArgs {
    /// Write the effective configuration back to disk
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let (config, path) = load_config(cli.config)?;

    match cli.command {
        Commands::Watch(args) => watch::execute(args, config),
        Commands::Models => {
            models::execute();
            Ok(())
        }
        Commands::Config(args) => show_config(args, &config, path),
    }
}

/// Load the explicit config file, or the platform one with defaults as fallback
fn load_config(explicit: Option<PathBuf>) -> Result<(InputConfig, Option<PathBuf>)> {
    match explicit {
        Some(path) => {
            let config = config::load_from(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            Ok((config, Some(path)))
        }
        None => Ok((config::load(), config::config_path())),
    }
}

fn show_config(args: ConfigArgs, config: &InputConfig, path: Option<PathBuf>) -> Result<()> {
    match &path {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no configuration directory available"),
    }
    println!("# host OS: {}", config.host_os());
    print!(
        "{}",
        toml::to_string_pretty(config).context("Failed to serialize config")?
    );

    if args.save {
        let path = path.context("No configuration directory available")?;
        config::save_to(config, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("# saved to {}", path.display());
    }
    Ok(())
}
