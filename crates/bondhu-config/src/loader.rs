// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./bondhu.toml` > `~/.config/bondhu/bondhu.toml`
//! > `/etc/bondhu/bondhu.toml` with environment variable overrides via
//! the `BONDHU_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::BondhuConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/bondhu/bondhu.toml` (system-wide)
/// 3. `~/.config/bondhu/bondhu.toml` (user XDG config)
/// 4. `./bondhu.toml` (local directory)
/// 5. `BONDHU_*` environment variables
pub fn load_config() -> Result<BondhuConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BondhuConfig::default()))
        .merge(Toml::file("/etc/bondhu/bondhu.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("bondhu/bondhu.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("bondhu.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<BondhuConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BondhuConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BondhuConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BondhuConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that
/// underscore-containing key names stay unambiguous:
/// `BONDHU_TELEGRAM_BOT_TOKEN` must map to `telegram.bot_token`, not
/// `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("BONDHU_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: BONDHU_LIMITER_MAX_REQUESTS -> "limiter_max_requests"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("limiter_", "limiter.", 1);
        mapped.into()
    })
}
