// Image scanning — media resolution plus the vision oracle call.
//
// Bytes come from exactly one source, in priority order: an inline base64
// blob, a remote URL (bounded fetch), or neither — in which case there is
// nothing to analyze and the scan short-circuits to an annotated approval
// without consulting the oracle.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::debug;

use crate::oracle::traits::MediaPart;

use super::models::Verdict;
use super::normalize;
use super::policy::{self, Modality};
use super::{Moderator, ScanError};

impl Moderator {
    /// Scan an image, resolving its bytes first.
    ///
    /// Decode and fetch failures propagate to the failure envelope.
    pub(crate) async fn scan_image(
        &self,
        media_url: Option<&str>,
        media_b64: Option<&str>,
    ) -> Result<Verdict, ScanError> {
        let bytes = if let Some(b64) = media_b64 {
            BASE64.decode(b64)?
        } else if let Some(url) = media_url {
            self.fetch_media(url).await?
        } else {
            return Ok(Verdict::approved_with_reason(
                "No image provided",
                self.oracle.vision_model(),
            ));
        };

        debug!(bytes = bytes.len(), "Image resolved for scan");

        // JPEG covers the overwhelming majority of uploads; the vision
        // model tolerates a mislabeled raster type.
        let media = MediaPart {
            mime_type: "image/jpeg".to_string(),
            data: bytes,
        };

        let prompt = policy::prompt_for(Modality::Image, None);
        let raw = self.oracle.classify_media(&prompt, &media).await?;

        let payload = normalize::extract_verdict(&raw)?;
        Ok(Verdict::from_oracle(payload, self.oracle.vision_model()))
    }

    /// Fetch remote media, requiring a success status.
    ///
    /// The client enforces the fixed fetch timeout.
    async fn fetch_media(&self, url: &str) -> Result<Vec<u8>, ScanError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ScanError::MediaFetch)?;

        if !response.status().is_success() {
            return Err(ScanError::MediaStatus {
                status: response.status(),
            });
        }

        let bytes = response.bytes().await.map_err(ScanError::MediaFetch)?;
        Ok(bytes.to_vec())
    }
}
