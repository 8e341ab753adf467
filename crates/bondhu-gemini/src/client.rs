// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` API.
//!
//! Provides [`GeminiClient`] which handles authentication, request
//! construction, and response extraction for both code generation and
//! question answering.

use std::time::Duration;

use async_trait::async_trait;
use bondhu_config::model::GeminiConfig;
use bondhu_core::{BondhuError, GenerationProvider, Language};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::instructions;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Base URL for the Gemini REST API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Lower temperature for deterministic code output.
const CODE_TEMPERATURE: f32 = 0.3;
const CODE_MAX_TOKENS: u32 = 8192;

/// Higher temperature for conversational answers.
const QA_TEMPERATURE: f32 = 0.7;
const QA_MAX_TOKENS: u32 = 4096;

/// HTTP client for Gemini API communication.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Creates a new Gemini API client.
    pub fn new(api_key: &str, model: String, timeout: Duration) -> Result<Self, BondhuError> {
        if api_key.is_empty() {
            return Err(BondhuError::Config("gemini API key is required".into()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| BondhuError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| BondhuError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(model = model.as_str(), "gemini client initialized");

        Ok(Self {
            client,
            model,
            base_url: API_BASE_URL.to_string(),
            timeout,
        })
    }

    /// Creates a client from the validated configuration section.
    ///
    /// A missing or empty `gemini.api_key` is fatal.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, BondhuError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                BondhuError::Config(
                    "gemini.api_key is required (set it in bondhu.toml or BONDHU_GEMINI_API_KEY)"
                        .into(),
                )
            })?;
        Self::new(
            api_key,
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    async fn generate(
        &self,
        prompt: String,
        temperature: f32,
        max_output_tokens: u32,
        fallback: &'static str,
    ) -> Result<String, BondhuError> {
        let request = GenerateContentRequest::single_turn(prompt, temperature, max_output_tokens);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BondhuError::Timeout {
                        duration: self.timeout,
                    }
                } else {
                    BondhuError::Provider {
                        message: format!("HTTP request failed: {e}"),
                        source: Some(Box::new(e)),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "gemini request failed");
            return Err(BondhuError::Provider {
                message: format!("Gemini API returned {status}: {body}"),
                source: None,
            });
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(|e| BondhuError::Provider {
                message: format!("failed to decode Gemini response: {e}"),
                source: Some(Box::new(e)),
            })?;

        // No usable candidate (e.g. all filtered) is answered with a
        // localized apology rather than an error.
        Ok(body.first_text().unwrap_or_else(|| {
            warn!("gemini response carried no candidate text");
            fallback.to_string()
        }))
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate_code(&self, prompt: &str, language: Language) -> Result<String, BondhuError> {
        let system = instructions::code_system_instruction(language);
        let full_prompt = format!("{system}\n\nUser Request: {prompt}");
        self.generate(
            full_prompt,
            CODE_TEMPERATURE,
            CODE_MAX_TOKENS,
            instructions::code_fallback(language),
        )
        .await
    }

    async fn answer_question(
        &self,
        question: &str,
        language: Language,
    ) -> Result<String, BondhuError> {
        let system = instructions::qa_system_instruction(language);
        let full_prompt = format!("{system}\n\nQuestion: {question}");
        self.generate(
            full_prompt,
            QA_TEMPERATURE,
            QA_MAX_TOKENS,
            instructions::qa_fallback(language),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: String) -> GeminiClient {
        GeminiClient::new(
            "test-key",
            "gemini-2.5-flash".to_string(),
            Duration::from_secs(30),
        )
        .unwrap()
        .with_base_url(base_url)
    }

    fn candidate_response(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": text}]}}
            ]
        }))
    }

    #[test]
    fn empty_api_key_is_config_error() {
        let result = GeminiClient::new("", "gemini-2.5-flash".to_string(), Duration::from_secs(30));
        assert!(matches!(result, Err(BondhuError::Config(_))));
    }

    #[test]
    fn from_config_requires_api_key() {
        let config = GeminiConfig {
            api_key: None,
            ..GeminiConfig::default()
        };
        assert!(matches!(
            GeminiClient::from_config(&config),
            Err(BondhuError::Config(_))
        ));
    }

    #[tokio::test]
    async fn generate_code_sends_code_config_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": {"temperature": 0.3, "maxOutputTokens": 8192}
            })))
            .respond_with(candidate_response("print('hi')"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(server.uri());
        let reply = client
            .generate_code("a hello script", Language::English)
            .await
            .unwrap();
        assert_eq!(reply, "print('hi')");
    }

    #[tokio::test]
    async fn answer_question_uses_qa_config() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(body_partial_json(json!({
                "generationConfig": {"temperature": 0.7, "maxOutputTokens": 4096}
            })))
            .respond_with(candidate_response("Gravity pulls things down."))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(server.uri());
        let reply = client
            .answer_question("what is gravity?", Language::English)
            .await
            .unwrap();
        assert_eq!(reply, "Gravity pulls things down.");
    }

    #[tokio::test]
    async fn empty_candidates_fall_back_to_localized_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = client(server.uri());
        let en = client
            .generate_code("anything", Language::English)
            .await
            .unwrap();
        assert_eq!(en, "Sorry, I couldn't generate code. Please try again.");

        let bn = client
            .answer_question("কিছু", Language::Bengali)
            .await
            .unwrap();
        assert_eq!(bn, "দুঃখিত, আমি এই প্রশ্নের উত্তর দিতে পারিনি। আবার চেষ্টা করুন।");
    }

    #[tokio::test]
    async fn http_error_surfaces_as_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
            .mount(&server)
            .await;

        let client = client(server.uri());
        let err = client
            .generate_code("anything", Language::English)
            .await
            .unwrap_err();
        match err {
            BondhuError::Provider { message, .. } => {
                assert!(message.contains("429"));
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn prompt_carries_system_instruction_and_user_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{
                    "text": format!(
                        "{}\n\nUser Request: sort a list",
                        instructions::code_system_instruction(Language::English)
                    )
                }]}]
            })))
            .respond_with(candidate_response("sorted"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(server.uri());
        let reply = client
            .generate_code("sort a list", Language::English)
            .await
            .unwrap();
        assert_eq!(reply, "sorted");
    }
}
