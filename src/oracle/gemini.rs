// Google Generative Language API implementation.
//
// A thin reqwest wrapper around `models/{model}:generateContent`. The
// request carries the policy prompt as a text part and, for media scans,
// the blob as a base64 inlineData part. The reply's first candidate text
// is returned raw — the normalizer deals with whatever formatting noise
// the model wrapped around its JSON.
//
// API docs: https://ai.google.dev/api/generate-content

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

use super::traits::{MediaPart, Oracle, OracleError};

/// Generative Language API oracle.
pub struct GeminiOracle {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    text_model: String,
    vision_model: String,
}

impl GeminiOracle {
    /// Build an oracle client from configuration.
    ///
    /// The request timeout bounds the whole classification call so the
    /// fail-open path resolves in bounded time. No retries — a failed
    /// attempt propagates immediately.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("palisade/0.1 (content-moderation)")
            .timeout(Duration::from_secs(config.oracle_timeout_secs))
            .build()
            .context("Failed to build oracle HTTP client")?;

        Ok(Self {
            client,
            base_url: config.oracle_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            text_model: config.text_model.clone(),
            vision_model: config.vision_model.clone(),
        })
    }

    /// POST a generateContent request and extract the first candidate text.
    async fn generate(&self, model: &str, parts: Vec<Part>) -> Result<String, OracleError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        debug!(model = model, "generateContent request");

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status { status, body });
        }

        let reply: GenerateContentResponse = response.json().await?;

        reply
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .ok_or(OracleError::EmptyResponse)
    }
}

#[async_trait]
impl Oracle for GeminiOracle {
    async fn classify_text(&self, prompt: &str) -> Result<String, OracleError> {
        let parts = vec![Part::Text {
            text: prompt.to_string(),
        }];
        self.generate(&self.text_model, parts).await
    }

    async fn classify_media(
        &self,
        prompt: &str,
        media: &MediaPart,
    ) -> Result<String, OracleError> {
        // Prompt first, then the blob — matches the ordering vision models
        // are tuned for.
        let parts = vec![
            Part::Text {
                text: prompt.to_string(),
            },
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: media.mime_type.clone(),
                    data: BASE64.encode(&media.data),
                },
            },
        ];
        self.generate(&self.vision_model, parts).await
    }

    fn text_model(&self) -> &str {
        &self.text_model
    }

    fn vision_model(&self) -> &str {
        &self.vision_model
    }
}

// --- generateContent request/response types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    /// Base64-encoded bytes.
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_request_serializes_prompt_then_inline_data() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: "policy".to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: BASE64.encode(b"bytes"),
                        },
                    },
                ],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "policy");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], BASE64.encode(b"bytes"));
    }

    #[test]
    fn response_text_extraction_skips_empty_candidates() {
        let raw = serde_json::json!({
            "candidates": [
                { "content": null },
                { "content": { "parts": [ { "text": "{\"is_safe\": true}" } ] } }
            ]
        });
        let reply: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        let text = reply
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text);
        assert_eq!(text.as_deref(), Some("{\"is_safe\": true}"));
    }
}
