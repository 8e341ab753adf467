// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Bondhu bot.
//!
//! Provides the shared error type, the domain types used throughout
//! the workspace, and the generation-provider trait.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::BondhuError;
pub use traits::GenerationProvider;
pub use types::{Intent, Language, ReplyFormat};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_construct() {
        let _config = BondhuError::Config("test".into());
        let _channel = BondhuError::Channel {
            message: "test".into(),
            source: None,
        };
        let _provider = BondhuError::Provider {
            message: "test".into(),
            source: None,
        };
        let _timeout = BondhuError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = BondhuError::Internal("test".into());
    }

    #[test]
    fn error_display_includes_context() {
        let err = BondhuError::Provider {
            message: "quota exceeded".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "provider error: quota exceeded");
    }
}
