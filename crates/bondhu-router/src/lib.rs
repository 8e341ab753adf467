// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request routing for the Bondhu bot.
//!
//! Turns an inbound Telegram message into one of four outcomes: a
//! fixed identity answer, a usage notice, a rate-limit denial, or an
//! admitted request carrying a detected language, a classified intent,
//! and a provider-ready prompt.

pub mod intent;
pub mod language;
pub mod messages;
pub mod prompts;
pub mod router;

pub use messages::Notice;
pub use router::{InboundRequest, RequestRouter, RouteOutcome, RouterDecision};
