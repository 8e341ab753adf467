// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: positive limiter settings, a positive chunk budget, a
//! positive request timeout, and a recognizable log level.

use crate::diagnostic::ConfigError;
use crate::model::BondhuConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &BondhuConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.limiter.max_requests == 0 {
        errors.push(ConfigError::Validation {
            message: "limiter.max_requests must be at least 1".to_string(),
        });
    }

    if config.limiter.window_seconds == 0 {
        errors.push(ConfigError::Validation {
            message: "limiter.window_seconds must be at least 1".to_string(),
        });
    }

    if config.limiter.sweep_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "limiter.sweep_interval_secs must be at least 1".to_string(),
        });
    }

    if config.telegram.max_message_length == 0 {
        errors.push(ConfigError::Validation {
            message: "telegram.max_message_length must be at least 1".to_string(),
        });
    }

    if config.gemini.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.request_timeout_secs must be at least 1".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` is not one of {}",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
