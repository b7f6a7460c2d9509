use std::env;

use anyhow::Result;

/// Default Generative Language API endpoint.
pub const DEFAULT_ORACLE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for text-only scans. Fast and cheap; the same model
/// handles vision, so both default to it.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.0-flash";

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// API key for the classification oracle. When empty, the web server
    /// still starts but answers every moderation request with a 500
    /// configuration error — no scan is ever attempted without it.
    pub api_key: String,
    /// Oracle endpoint base URL — pass a different URL for testing.
    pub oracle_url: String,
    /// Model used for text-only scans.
    pub text_model: String,
    /// Model used for image scans.
    pub vision_model: String,
    /// Request timeout for oracle calls, in seconds. An unbounded oracle
    /// call would defeat the fail-open latency guarantee.
    pub oracle_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API key has a default; the key is only
    /// required once a scan actually runs.
    pub fn load() -> Result<Self> {
        let oracle_timeout_secs = match env::var("PALISADE_ORACLE_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or(60),
            Err(_) => 60,
        };

        Ok(Self {
            api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            oracle_url: env::var("PALISADE_ORACLE_URL")
                .unwrap_or_else(|_| DEFAULT_ORACLE_URL.to_string()),
            text_model: env::var("PALISADE_TEXT_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            vision_model: env::var("PALISADE_VISION_MODEL")
                .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string()),
            oracle_timeout_secs,
        })
    }

    /// Check that the oracle API key is configured.
    /// Call this before any operation that needs a real scan.
    pub fn require_oracle(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "GOOGLE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
