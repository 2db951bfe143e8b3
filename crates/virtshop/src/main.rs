// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Virtshop - a Telegram shop bot for in-game currency orders.
//!
//! This is the binary entry point for the virtshop bot.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use virtshop_config::{ConfigError, VirtshopConfig};

mod check;
mod serve;
mod shutdown;

/// Virtshop - a Telegram shop bot for in-game currency orders.
#[derive(Parser, Debug)]
#[command(name = "virtshop", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the default search.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the bot and poll for messages until SIGINT/SIGTERM.
    Serve,
    /// Verify configuration and Telegram connectivity, then exit.
    Check,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            virtshop_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Check) => check::run_check(&config).await,
        None => {
            println!("virtshop: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<VirtshopConfig, Vec<ConfigError>> {
    match path {
        Some(path) => virtshop_config::load_and_validate_path(path),
        None => virtshop_config::load_and_validate(),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_answers_the_stats_probe() {
        // epoch::advance only works against jemalloc, so a passing probe
        // proves the global allocator really was swapped.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn defaults_load_without_any_config_file() {
        let config = virtshop_config::load_and_validate()
            .expect("built-in defaults should validate");
        assert_eq!(config.bot.name, "virtshop");
    }
}
