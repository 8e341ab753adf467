// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The generation-provider trait the transport depends on.
//!
//! The router builds an enhanced prompt; a provider turns it into a
//! reply. The concrete Gemini client lives in `bondhu-gemini`; keeping
//! the trait here lets the transport and tests depend on the seam
//! rather than the HTTP client.

use async_trait::async_trait;

use crate::error::BondhuError;
use crate::types::Language;

/// A generative-text backend.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generates code for an enhanced build prompt.
    async fn generate_code(&self, prompt: &str, language: Language)
        -> Result<String, BondhuError>;

    /// Answers an open-domain question.
    async fn answer_question(
        &self,
        prompt: &str,
        language: Language,
    ) -> Result<String, BondhuError>;
}
