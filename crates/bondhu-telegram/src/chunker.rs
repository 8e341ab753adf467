// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splitting long replies to fit the transport's message-size ceiling.

/// Splits `text` into chunks of at most `max_len` characters.
///
/// Chunks are contiguous, in order, and concatenate back to `text`
/// exactly. Cuts are hard: no attempt is made to respect word or line
/// boundaries. Empty input yields a single empty chunk.
///
/// `max_len` must be positive; the configured value is validated at
/// startup.
pub fn split(text: &str, max_len: usize) -> Vec<String> {
    assert!(max_len > 0, "chunk length must be positive");

    if text.is_empty() {
        return vec![String::new()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for c in text.chars() {
        if count == max_len {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(c);
        count += 1;
    }
    chunks.push(current);

    chunks
}
