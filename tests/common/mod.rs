// Shared test double for the oracle seam.
//
// MockOracle returns a scripted reply (or a scripted failure) and counts
// invocations, so tests can assert both what verdict came out and whether
// the oracle was consulted at all.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use palisade::oracle::traits::{MediaPart, Oracle, OracleError};
use palisade::scan::Moderator;

pub struct MockOracle {
    /// Scripted reply; None makes every call fail with a service error.
    reply: Option<String>,
    calls: AtomicUsize,
}

impl MockOracle {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<String, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(OracleError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "scripted outage".to_string(),
            }),
        }
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn classify_text(&self, _prompt: &str) -> Result<String, OracleError> {
        self.answer()
    }

    async fn classify_media(
        &self,
        _prompt: &str,
        _media: &MediaPart,
    ) -> Result<String, OracleError> {
        self.answer()
    }

    fn text_model(&self) -> &str {
        "mock-text"
    }

    fn vision_model(&self) -> &str {
        "mock-vision"
    }
}

/// Build a Moderator around a mock.
pub fn moderator(oracle: Arc<MockOracle>) -> Moderator {
    Moderator::new(oracle).expect("moderator construction")
}
