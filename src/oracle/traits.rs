// Oracle trait — the swap-ready abstraction over the external classifier.
//
// The production implementation is GeminiOracle. Scanners only ever see
// this trait, so tests inject a scripted oracle and the provider can be
// swapped without touching the dispatch or normalization logic.

use async_trait::async_trait;
use thiserror::Error;

/// A binary media attachment for a multimodal classification call.
#[derive(Debug, Clone)]
pub struct MediaPart {
    /// MIME type of `data` (e.g. "image/jpeg").
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Failures from the external classifier call itself.
///
/// These never surface to the end user directly — the failure envelope
/// converts them into an approved verdict carrying a short cause string.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("oracle returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("oracle response contained no candidate text")]
    EmptyResponse,
}

/// Trait for consulting the external content classifier. Implementations
/// must be async because providers sit behind HTTP APIs.
///
/// Both operations return the oracle's raw free-form text; extracting the
/// structured verdict from it is the normalizer's job, not the client's.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Classify text-only content under the given policy prompt.
    async fn classify_text(&self, prompt: &str) -> Result<String, OracleError>;

    /// Classify a media blob under the given policy prompt.
    async fn classify_media(
        &self,
        prompt: &str,
        media: &MediaPart,
    ) -> Result<String, OracleError>;

    /// Name of the model answering text classifications, for `model_used`.
    fn text_model(&self) -> &str;

    /// Name of the model answering media classifications.
    fn vision_model(&self) -> &str;
}
