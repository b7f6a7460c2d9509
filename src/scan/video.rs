// Video scanning — best-effort approximation via the image path.
//
// There is no frame extraction. A base64 blob is assumed to be a frame or
// thumbnail; a URL that looks like a still image is scanned as one; real
// video files get an annotated approval suggesting manual review. Unlike
// the other scanners this one never propagates an error: its whole
// contract is best-effort, so failures convert locally.

use tracing::warn;

use super::models::Verdict;
use super::Moderator;

/// URL suffixes treated as still images rather than video containers.
const RASTER_SUFFIXES: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

fn looks_like_still(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    RASTER_SUFFIXES
        .iter()
        .any(|suffix| path.to_ascii_lowercase().ends_with(suffix))
}

impl Moderator {
    /// Scan video content, infallibly.
    pub(crate) async fn scan_video(
        &self,
        media_url: Option<&str>,
        media_b64: Option<&str>,
    ) -> Verdict {
        let attempt = if media_b64.is_some() {
            self.scan_image(None, media_b64).await
        } else if media_url.is_some_and(looks_like_still) {
            self.scan_image(media_url, None).await
        } else {
            return Verdict::approved_with_reason(
                "Video moderation requires frame extraction - manual review suggested",
                "none (video - needs frame extraction)",
            );
        };

        match attempt {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(error = %e, "Video scan failed, approving");
                Verdict::approved_with_reason(&format!("Video scan error: {e}"), "error")
            }
        }
    }
}
