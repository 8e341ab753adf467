// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Language detection from message text and client locale tags.

use bondhu_core::Language;

/// Detects the language of a message from its script.
///
/// Any character in the Bengali Unicode block (U+0980..U+09FF) marks
/// the whole message as Bengali; everything else is treated as English.
/// Mixed-script messages therefore resolve to Bengali, matching how
/// replies should read for a user who typed any Bengali at all.
pub fn detect_from_text(text: &str) -> Language {
    if text.chars().any(is_bengali_char) {
        Language::Bengali
    } else {
        Language::English
    }
}

/// Detects the language from a client-declared IETF locale tag.
///
/// Only used for messages sent before any text is available to
/// classify (greetings, usage errors, rate-limit notices).
pub fn detect_from_locale(locale: Option<&str>) -> Language {
    match locale {
        Some(tag) if tag.starts_with("bn") => Language::Bengali,
        _ => Language::English,
    }
}

fn is_bengali_char(c: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_text_is_english() {
        assert_eq!(detect_from_text("write me a sorting function"), Language::English);
    }

    #[test]
    fn bengali_script_is_bengali() {
        assert_eq!(detect_from_text("পাইথনে কোড লিখ"), Language::Bengali);
    }

    #[test]
    fn single_bengali_char_flips_detection() {
        assert_eq!(detect_from_text("make an app কি"), Language::Bengali);
    }

    #[test]
    fn empty_text_defaults_to_english() {
        assert_eq!(detect_from_text(""), Language::English);
    }

    #[test]
    fn locale_bn_variants_are_bengali() {
        assert_eq!(detect_from_locale(Some("bn")), Language::Bengali);
        assert_eq!(detect_from_locale(Some("bn-BD")), Language::Bengali);
    }

    #[test]
    fn locale_other_or_missing_is_english() {
        assert_eq!(detect_from_locale(Some("en-US")), Language::English);
        assert_eq!(detect_from_locale(Some("de")), Language::English);
        assert_eq!(detect_from_locale(None), Language::English);
    }
}
