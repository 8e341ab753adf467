// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `bondhu serve` command implementation.
//!
//! Wires the sliding-window limiter, request router, Gemini provider,
//! and Telegram transport together and runs long polling until
//! shutdown.

use std::sync::Arc;
use std::time::Duration;

use bondhu_config::model::BondhuConfig;
use bondhu_core::{BondhuError, GenerationProvider};
use bondhu_gemini::GeminiClient;
use bondhu_limiter::SlidingWindowLimiter;
use bondhu_router::RequestRouter;
use bondhu_telegram::TelegramChannel;
use tracing::{error, info};

/// Runs the `bondhu serve` command.
pub async fn run_serve(config: BondhuConfig) -> Result<(), BondhuError> {
    init_tracing(&config.agent.log_level);

    info!(name = config.agent.name.as_str(), "starting bondhu serve");

    let limiter = Arc::new(SlidingWindowLimiter::from_config(&config.limiter)?);
    spawn_sweep_task(limiter.clone(), config.limiter.sweep_interval_secs);

    let provider = GeminiClient::from_config(&config.gemini).map_err(|e| {
        error!(error = %e, "failed to initialize Gemini provider");
        eprintln!(
            "error: Gemini API key required. Set gemini.api_key in bondhu.toml \
             or export BONDHU_GEMINI_API_KEY."
        );
        e
    })?;
    let provider: Arc<dyn GenerationProvider> = Arc::new(provider);

    let router = RequestRouter::new(limiter);
    let channel = TelegramChannel::new(&config.telegram, router, provider).map_err(|e| {
        error!(error = %e, "failed to initialize Telegram channel");
        eprintln!(
            "error: Telegram bot token required. Set telegram.bot_token in bondhu.toml \
             or export BONDHU_TELEGRAM_BOT_TOKEN."
        );
        e
    })?;

    info!(
        model = config.gemini.model.as_str(),
        max_requests = config.limiter.max_requests,
        window_secs = config.limiter.window_seconds,
        max_message_length = config.telegram.max_message_length,
        "bondhu configured"
    );

    channel.run().await;

    info!("bondhu serve shutdown complete");
    Ok(())
}

/// Spawns the periodic task that drops idle per-user rate-limit windows.
fn spawn_sweep_task(limiter: Arc<SlidingWindowLimiter>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        // Skip the first immediate tick.
        interval.tick().await;

        loop {
            interval.tick().await;
            limiter.sweep(limiter.clock());
        }
    });
    info!(interval_secs, "limiter sweep task started");
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bondhu={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
