// Oracle reply normalization.
//
// The oracle is asked for bare JSON but treats that as a suggestion: replies
// arrive fenced, prefixed with prose, or both. This module is the single
// place that turns untrusted free-form model output into a structured
// payload, with a typed error when no payload can be recovered. A parse
// failure here is a hard error for the calling scanner — defaulting to
// "safe" is the failure envelope's decision, not the normalizer's.

use serde::Deserialize;
use thiserror::Error;

/// The structured payload embedded in an oracle reply.
///
/// A reply that parses but omits `is_safe` is treated as unsafe: the oracle
/// spoke but didn't clear the content.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleVerdict {
    #[serde(default)]
    pub is_safe: bool,
    #[serde(default)]
    pub flag_reason: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub detected_minors: Option<bool>,
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("oracle reply contained no JSON payload")]
    NoPayload,

    #[error("oracle reply payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Extract the structured verdict from a raw oracle reply.
///
/// Strips fenced-code wrapping, then parses. If the stripped reply isn't
/// valid JSON on its own, falls back to the slice between the first `{`
/// and the last `}` — enough to survive a sentence of preamble without
/// accepting arbitrary garbage.
pub fn extract_verdict(raw: &str) -> Result<OracleVerdict, NormalizeError> {
    let stripped = strip_fences(raw);

    match serde_json::from_str(stripped) {
        Ok(verdict) => Ok(verdict),
        Err(direct_err) => {
            let start = stripped.find('{');
            let end = stripped.rfind('}');
            match (start, end) {
                (Some(start), Some(end)) if start < end => {
                    serde_json::from_str(&stripped[start..=end]).map_err(NormalizeError::from)
                }
                _ => {
                    // No braces at all: report the absence, not the
                    // incidental syntax error from parsing prose.
                    if stripped.contains('{') {
                        Err(NormalizeError::from(direct_err))
                    } else {
                        Err(NormalizeError::NoPayload)
                    }
                }
            }
        }
    }
}

/// Remove fenced-code markers and surrounding whitespace.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        assert_eq!(
            strip_fences("```json\n{\"is_safe\": true}\n```"),
            "{\"is_safe\": true}"
        );
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_fences("```\n{}\n```"), "{}");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_fences(" {\"is_safe\": false} "), "{\"is_safe\": false}");
    }
}
