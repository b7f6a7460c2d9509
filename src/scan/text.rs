// Text scanning — prompt with the input inline, no media part.

use tracing::debug;

use super::models::Verdict;
use super::normalize;
use super::policy::{self, Modality};
use super::{Moderator, ScanError};

impl Moderator {
    /// Scan user-supplied text (may be empty).
    ///
    /// Oracle and parse failures propagate; converting them to a safe
    /// default is the failure envelope's job, not this scanner's.
    pub(crate) async fn scan_text(&self, text: &str) -> Result<Verdict, ScanError> {
        let prompt = policy::prompt_for(Modality::Text, Some(text));

        let raw = self.oracle.classify_text(&prompt).await?;
        debug!(reply_len = raw.len(), "Text scan reply received");

        let payload = normalize::extract_verdict(&raw)?;
        Ok(Verdict::from_oracle(payload, self.oracle.text_model()))
    }
}
