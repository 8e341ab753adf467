// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message handlers: command dispatch, free-text routing, and reply
//! delivery.
//!
//! Build replies are sent as Markdown with a per-chunk plain-text
//! fallback, since model output regularly contains markup Telegram
//! refuses to parse. Question answers are sent plain to avoid the
//! round trip entirely.

use std::sync::Arc;

use bondhu_core::{BondhuError, GenerationProvider, ReplyFormat};
use bondhu_router::messages::{self, Notice};
use bondhu_router::{InboundRequest, RequestRouter, RouteOutcome, RouterDecision};
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, ParseMode};
use tracing::{debug, error, warn};

use crate::chunker;
use crate::commands::Command;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Shared state for all handler invocations.
pub struct AppState {
    pub router: RequestRouter,
    pub provider: Arc<dyn GenerationProvider>,
    pub max_message_length: usize,
}

/// Stable per-user key for admission control.
pub fn sender_key(msg: &Message) -> String {
    msg.from
        .as_ref()
        .map(|u| u.id.0.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// The client-declared locale tag, if the sender exposed one.
pub fn declared_locale(msg: &Message) -> Option<&str> {
    msg.from.as_ref().and_then(|u| u.language_code.as_deref())
}

/// Whether the message is a slash command. The dispatcher evaluates
/// this only after command parsing has already failed, so a match
/// means an unrecognized command, which is dropped rather than
/// classified as free text.
pub fn is_stray_command(msg: &Message) -> bool {
    msg.text().is_some_and(|text| text.starts_with('/'))
}

/// Handles a parsed bot command.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> HandlerResult {
    let locale_lang = bondhu_router::language::detect_from_locale(declared_locale(&msg));

    if let Some((intent, argument)) = cmd.generation_request() {
        let user_key = sender_key(&msg);
        let request = InboundRequest {
            user_key: &user_key,
            text: argument,
            declared_locale: declared_locale(&msg),
        };
        let outcome = state.router.route_command_now(intent, &request);
        deliver_outcome(&bot, &msg, &state, outcome).await?;
        return Ok(());
    }

    match cmd {
        Command::Start => {
            send_formatted(
                &bot,
                msg.chat.id,
                messages::text(Notice::Welcome, locale_lang),
                ReplyFormat::Markdown,
            )
            .await?;
        }
        Command::Help => {
            send_formatted(
                &bot,
                msg.chat.id,
                messages::text(Notice::Help, locale_lang),
                ReplyFormat::Markdown,
            )
            .await?;
        }
        Command::Lang => {
            send_formatted(
                &bot,
                msg.chat.id,
                messages::text(Notice::LanguageInfo, locale_lang),
                ReplyFormat::Plain,
            )
            .await?;
        }
        Command::Status => {
            send_formatted(
                &bot,
                msg.chat.id,
                messages::text(Notice::Status, locale_lang),
                ReplyFormat::Plain,
            )
            .await?;
        }
        _ => {}
    }

    Ok(())
}

/// Handles free-form text (anything that is not a command).
pub async fn handle_text(bot: Bot, msg: Message, state: Arc<AppState>) -> HandlerResult {
    let Some(text) = msg.text() else {
        debug!(msg_id = msg.id.0, "ignoring non-text message");
        return Ok(());
    };

    let user_key = sender_key(&msg);
    let request = InboundRequest {
        user_key: &user_key,
        text,
        declared_locale: declared_locale(&msg),
    };
    let outcome = state.router.route_text_now(&request);
    deliver_outcome(&bot, &msg, &state, outcome).await?;

    Ok(())
}

/// Sends the reply a routing outcome calls for.
async fn deliver_outcome(
    bot: &Bot,
    msg: &Message,
    state: &AppState,
    outcome: RouteOutcome,
) -> Result<(), BondhuError> {
    match outcome {
        RouteOutcome::Identity { reply } => {
            send_formatted(bot, msg.chat.id, reply, ReplyFormat::Plain).await
        }
        RouteOutcome::Usage { notice } | RouteOutcome::Denied { notice } => {
            send_formatted(bot, msg.chat.id, notice, ReplyFormat::Plain).await
        }
        RouteOutcome::Accepted(decision) => generate_and_reply(bot, msg, state, decision).await,
    }
}

/// Calls the generation provider and delivers the (possibly chunked)
/// reply. Provider failures are reported to the user as a localized
/// error notice rather than silence.
async fn generate_and_reply(
    bot: &Bot,
    msg: &Message,
    state: &AppState,
    decision: RouterDecision,
) -> Result<(), BondhuError> {
    if let Err(e) = bot
        .send_chat_action(msg.chat.id, ChatAction::Typing)
        .await
    {
        debug!(error = %e, "failed to send typing indicator");
    }

    let result = if decision.intent.is_build() {
        state
            .provider
            .generate_code(&decision.enhanced_prompt, decision.language)
            .await
    } else {
        state
            .provider
            .answer_question(&decision.enhanced_prompt, decision.language)
            .await
    };

    match result {
        Ok(reply) => {
            let format = if decision.intent.is_build() {
                ReplyFormat::Markdown
            } else {
                ReplyFormat::Plain
            };
            send_chunked(bot, msg.chat.id, &reply, state.max_message_length, format).await
        }
        Err(e) => {
            error!(error = %e, intent = %decision.intent, "generation failed");
            send_formatted(
                bot,
                msg.chat.id,
                messages::text(Notice::Error, decision.language),
                ReplyFormat::Plain,
            )
            .await
        }
    }
}

/// Sends a reply in order, one message per chunk.
async fn send_chunked(
    bot: &Bot,
    chat_id: ChatId,
    text: &str,
    max_len: usize,
    format: ReplyFormat,
) -> Result<(), BondhuError> {
    for chunk in chunker::split(text, max_len) {
        send_formatted(bot, chat_id, &chunk, format).await?;
    }
    Ok(())
}

/// Sends one message, downgrading Markdown to plain text when
/// Telegram rejects the markup.
async fn send_formatted(
    bot: &Bot,
    chat_id: ChatId,
    text: &str,
    format: ReplyFormat,
) -> Result<(), BondhuError> {
    match format {
        ReplyFormat::Markdown => {
            match bot
                .send_message(chat_id, text)
                .parse_mode(ParseMode::Markdown)
                .await
            {
                Ok(_) => Ok(()),
                Err(e) => {
                    warn!(error = %e, "Markdown send failed, retrying as plain text");
                    bot.send_message(chat_id, text)
                        .await
                        .map_err(|e| BondhuError::Channel {
                            message: format!("failed to send message: {e}"),
                            source: Some(Box::new(e)),
                        })?;
                    Ok(())
                }
            }
        }
        ReplyFormat::Plain => {
            bot.send_message(chat_id, text)
                .await
                .map_err(|e| BondhuError::Channel {
                    message: format!("failed to send message: {e}"),
                    source: Some(Box::new(e)),
                })?;
            Ok(())
        }
    }
}
