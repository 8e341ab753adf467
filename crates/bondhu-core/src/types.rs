// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Bondhu workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two languages the bot understands.
///
/// English is the primary language; Bengali is detected from the
/// dedicated Unicode block or a `bn` locale tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[strum(serialize = "en")]
    #[serde(rename = "en")]
    English,
    #[strum(serialize = "bn")]
    #[serde(rename = "bn")]
    Bengali,
}

/// The classified purpose of an inbound message.
///
/// Command-derived intents map 1:1 to bot commands; free-form text is
/// classified into `General` (a build request) or `Ask` (a question).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Code,
    App,
    Web,
    Ai,
    Ml,
    Mobile,
    Database,
    Api,
    Ask,
    General,
}

impl Intent {
    /// Whether this intent routes to code generation rather than
    /// open-domain question answering.
    pub fn is_build(self) -> bool {
        !matches!(self, Intent::Ask)
    }
}

/// Rendering mode hint carried alongside an outbound reply.
///
/// The transport may downgrade `Markdown` to `Plain` per chunk when
/// structured rendering fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFormat {
    Markdown,
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn language_display_round_trips() {
        for lang in [Language::English, Language::Bengali] {
            let s = lang.to_string();
            assert_eq!(Language::from_str(&s).unwrap(), lang);
        }
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::Bengali.to_string(), "bn");
    }

    #[test]
    fn intent_build_split() {
        assert!(Intent::Code.is_build());
        assert!(Intent::General.is_build());
        assert!(Intent::Database.is_build());
        assert!(!Intent::Ask.is_build());
    }

    #[test]
    fn intent_serializes_lowercase() {
        let json = serde_json::to_string(&Intent::Mobile).unwrap();
        assert_eq!(json, "\"mobile\"");
    }
}
