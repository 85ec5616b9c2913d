// crates/reservemate-cli/src/main.rs - CLI Application Entry Point
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │───▶│   LogicManager      │
//                        │ (config + prefs) │    │ (reservemate-core)  │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// reservemate                                        # Interactive shell
// reservemate exec add n/Amy p/12345 e/amy@example.com d/4 t/2030-12-25 1800
// reservemate exec delete 1 confirm
// reservemate list --json | jq '.[] | .name'
// ```

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reservemate_core::ConfigManager;

mod cli; // Command-line interface definitions
mod commands; // Subcommand handlers
mod context; // Configuration, storage and logic wiring
mod render; // Terminal output
mod stdin; // Line and confirmation input

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        ConfigManager::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    install_tracing(&config.log_level);

    let mut ctx = Context::new(config, cli.config, cli.data, cli.allow_past);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::run(&mut ctx),
        Commands::Exec { words } => commands::exec::handle(&mut ctx, &words),
        Commands::List { json } => commands::list::handle(&ctx, json),
    }
}

/// Log to stderr so stdout stays clean for command output
///
/// `RUST_LOG` takes precedence over the configured level.
fn install_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
