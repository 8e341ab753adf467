// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Bondhu bot.

use thiserror::Error;

/// The primary error type used across all Bondhu crates.
#[derive(Debug, Error)]
pub enum BondhuError {
    /// Configuration errors (missing credentials, invalid settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Channel errors (Telegram API failure, message delivery).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generation provider errors (Gemini API failure, malformed reply).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
