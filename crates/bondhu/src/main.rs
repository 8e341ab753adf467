// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bondhu - a bilingual Telegram assistant powered by Google Gemini.
//!
//! This is the binary entry point for the Bondhu bot.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Bondhu - a bilingual Telegram assistant powered by Google Gemini.
#[derive(Parser, Debug)]
#[command(name = "bondhu", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the bot (default).
    Serve,
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match bondhu_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            bondhu_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Config) => {
            let mut shown = config.clone();
            if shown.gemini.api_key.is_some() {
                shown.gemini.api_key = Some("<redacted>".to_string());
            }
            if shown.telegram.bot_token.is_some() {
                shown.telegram.bot_token = Some("<redacted>".to_string());
            }
            match toml::to_string_pretty(&shown) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => {
                    eprintln!("bondhu: failed to render configuration: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Serve) | None => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("bondhu: {e}");
                std::process::exit(1);
            }
        }
    }
}
