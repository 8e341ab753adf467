// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram transport for the Bondhu bot.
//!
//! Connects via long polling, registers the command menu, and routes
//! every inbound message through the request router and on to the
//! generation provider.

pub mod chunker;
pub mod commands;
pub mod handler;

use std::sync::Arc;

use bondhu_config::model::TelegramConfig;
use bondhu_core::{BondhuError, GenerationProvider};
use bondhu_router::RequestRouter;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use crate::commands::Command;
use crate::handler::AppState;

/// Telegram channel running the bot's dispatch loop.
pub struct TelegramChannel {
    bot: Bot,
    state: Arc<AppState>,
}

impl TelegramChannel {
    /// Creates the channel.
    ///
    /// Requires `config.bot_token` to be set and non-empty.
    pub fn new(
        config: &TelegramConfig,
        router: RequestRouter,
        provider: Arc<dyn GenerationProvider>,
    ) -> Result<Self, BondhuError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            BondhuError::Config(
                "telegram.bot_token is required (set it in bondhu.toml or BONDHU_TELEGRAM_BOT_TOKEN)"
                    .into(),
            )
        })?;

        if token.is_empty() {
            return Err(BondhuError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        let bot = Bot::new(token);
        let state = Arc::new(AppState {
            router,
            provider,
            max_message_length: config.max_message_length,
        });

        Ok(Self { bot, state })
    }

    /// Returns a reference to the underlying teloxide Bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Runs long polling until shutdown (Ctrl-C).
    pub async fn run(self) {
        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!(error = %e, "failed to register command menu");
        }

        info!("starting Telegram long polling");

        let handler = Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handler::handle_command),
            )
            .branch(
                dptree::filter(|msg: Message| !handler::is_stray_command(&msg))
                    .endpoint(handler::handle_text),
            );

        Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.state])
            .default_handler(|_| async {})
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bondhu_core::Language;
    use bondhu_limiter::SlidingWindowLimiter;
    use std::time::Duration;

    struct StubProvider;

    #[async_trait]
    impl GenerationProvider for StubProvider {
        async fn generate_code(
            &self,
            _prompt: &str,
            _language: Language,
        ) -> Result<String, BondhuError> {
            Ok("code".into())
        }

        async fn answer_question(
            &self,
            _question: &str,
            _language: Language,
        ) -> Result<String, BondhuError> {
            Ok("answer".into())
        }
    }

    fn router() -> RequestRouter {
        let limiter = SlidingWindowLimiter::new(10, Duration::from_secs(60)).unwrap();
        RequestRouter::new(Arc::new(limiter))
    }

    #[test]
    fn new_requires_bot_token() {
        let config = TelegramConfig {
            bot_token: None,
            ..TelegramConfig::default()
        };
        assert!(TelegramChannel::new(&config, router(), Arc::new(StubProvider)).is_err());
    }

    #[test]
    fn new_rejects_empty_token() {
        let config = TelegramConfig {
            bot_token: Some(String::new()),
            ..TelegramConfig::default()
        };
        assert!(TelegramChannel::new(&config, router(), Arc::new(StubProvider)).is_err());
    }

    #[test]
    fn new_accepts_valid_token() {
        let config = TelegramConfig {
            bot_token: Some("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11".into()),
            ..TelegramConfig::default()
        };
        assert!(TelegramChannel::new(&config, router(), Arc::new(StubProvider)).is_ok());
    }
}
