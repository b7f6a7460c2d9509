// Scanning — dispatch, per-modality scanners, and the failure envelope.
//
// The Moderator owns the injected oracle handle and the media-fetch client;
// it is constructed once at startup and shared immutably across requests.
// `moderate` is the only entry point callers should use: it wraps dispatch
// in the fail-open envelope so a moderation failure never surfaces as an
// error to the application.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::error;

use crate::oracle::traits::{Oracle, OracleError};

pub mod models;
pub mod normalize;
pub mod policy;

mod image;
mod text;
mod video;

use self::models::{ContentType, ModerationRequest, Verdict};
use self::normalize::NormalizeError;

/// Timeout for fetching remote media before an image scan.
const MEDIA_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything that can go wrong inside a scan.
///
/// The failure envelope converts any of these into an approved verdict;
/// they exist as a typed taxonomy so that conversion is an explicit
/// last-resort handler rather than a catch-all.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid base64 media payload: {0}")]
    MediaDecode(#[from] base64::DecodeError),

    #[error("media fetch failed: {0}")]
    MediaFetch(#[source] reqwest::Error),

    #[error("media fetch returned {status}")]
    MediaStatus { status: reqwest::StatusCode },

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// The dispatcher: routes each request to its modality's scanner and
/// applies the fail-open policy around the whole scan.
pub struct Moderator {
    oracle: Arc<dyn Oracle>,
    /// Client for fetching remote media. Separate from the oracle's own
    /// client so the fetch keeps its fixed 30s bound.
    http: reqwest::Client,
}

impl Moderator {
    pub fn new(oracle: Arc<dyn Oracle>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("palisade/0.1 (content-moderation)")
            .timeout(MEDIA_FETCH_TIMEOUT)
            .build()
            .context("Failed to build media fetch client")?;

        Ok(Self { oracle, http })
    }

    /// Scan a request, never failing.
    ///
    /// Fail-open is a product decision: a moderation outage must not block
    /// legitimate user actions, so any scan error resolves to an approved
    /// verdict with the cause embedded for observability. The cost of a
    /// false negative here is judged lower than blocking all traffic on
    /// oracle or network instability.
    pub async fn moderate(&self, request: &ModerationRequest) -> Verdict {
        match self.dispatch(request).await {
            Ok(verdict) => verdict,
            Err(e) => {
                error!(error = %e, "Scan failed, failing open");
                Verdict::fail_open(&e.to_string())
            }
        }
    }

    /// Route to the scanner for the declared content type.
    ///
    /// Unrecognized types scan as text. Audio is a deferred capability:
    /// approved up front with no oracle call, not a failure.
    async fn dispatch(&self, request: &ModerationRequest) -> Result<Verdict, ScanError> {
        match request.declared_type() {
            ContentType::Text => self.scan_text(&request.content).await,
            ContentType::Image => {
                self.scan_image(request.media_url.as_deref(), request.media_b64.as_deref())
                    .await
            }
            ContentType::Video => Ok(self
                .scan_video(request.media_url.as_deref(), request.media_b64.as_deref())
                .await),
            ContentType::Audio => Ok(Verdict::approved(
                "none (audio - manual review suggested)",
            )),
        }
    }
}
