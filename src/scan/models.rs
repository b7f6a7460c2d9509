// Data models — the request and verdict shapes of one moderation scan.
//
// These types are created per request and live only for one scan; nothing
// here is persisted. They're separate from the scanners so the web layer
// and CLI can use them without depending on the dispatch logic.

use serde::{Deserialize, Serialize};

use super::normalize::OracleVerdict;

/// An inbound moderation request.
///
/// At most one of the media fields is meaningfully used per scan; both may
/// be absent for text-only content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModerationRequest {
    /// Text content to scan (empty for pure media requests).
    #[serde(default)]
    pub content: String,
    /// Remote location of the media to scan.
    #[serde(default)]
    pub media_url: Option<String>,
    /// Base64-encoded media bytes.
    #[serde(default)]
    pub media_b64: Option<String>,
    /// Declared modality. Kept as the raw string so unrecognized values
    /// fall back to text instead of failing request parsing.
    #[serde(default)]
    pub content_type: Option<String>,
}

impl ModerationRequest {
    /// Resolve the declared content type, defaulting to text.
    pub fn declared_type(&self) -> ContentType {
        self.content_type
            .as_deref()
            .map(ContentType::from_name)
            .unwrap_or(ContentType::Text)
    }
}

/// The declared modality of submitted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Image,
    Video,
    Audio,
}

impl ContentType {
    /// Parse a declared type name. Anything unrecognized is treated as
    /// text — the scan must still happen, not be rejected.
    pub fn from_name(name: &str) -> Self {
        match name {
            "image" => ContentType::Image,
            "video" => ContentType::Video,
            "audio" => ContentType::Audio,
            _ => ContentType::Text,
        }
    }
}

/// Approval state of a verdict. Always derived from `is_safe` — never set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Approved,
    Flagged,
}

impl ModerationStatus {
    pub fn from_is_safe(is_safe: bool) -> Self {
        if is_safe {
            ModerationStatus::Approved
        } else {
            ModerationStatus::Flagged
        }
    }
}

/// Classification label carried through from the oracle when present.
/// Metadata only — no control flow branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyCategory {
    Nudity,
    Age,
    Violence,
    Spam,
    Privacy,
    Hate,
    Sexual,
    Safe,
}

impl PolicyCategory {
    /// Parse an oracle-supplied label. Unknown labels yield None — the
    /// category is informational and must not fail normalization.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "nudity" => Some(PolicyCategory::Nudity),
            "age" => Some(PolicyCategory::Age),
            "violence" => Some(PolicyCategory::Violence),
            "spam" => Some(PolicyCategory::Spam),
            "privacy" => Some(PolicyCategory::Privacy),
            "hate" => Some(PolicyCategory::Hate),
            "sexual" => Some(PolicyCategory::Sexual),
            "safe" => Some(PolicyCategory::Safe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyCategory::Nudity => "nudity",
            PolicyCategory::Age => "age",
            PolicyCategory::Violence => "violence",
            PolicyCategory::Spam => "spam",
            PolicyCategory::Privacy => "privacy",
            PolicyCategory::Hate => "hate",
            PolicyCategory::Sexual => "sexual",
            PolicyCategory::Safe => "safe",
        }
    }
}

/// The canonical result of one scan.
///
/// Construct through the helpers below so `moderation_status` stays a pure
/// function of `is_safe`.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub is_safe: bool,
    pub moderation_status: ModerationStatus,
    pub flag_reason: Option<String>,
    /// Which scanning path produced this verdict: an oracle model name, or
    /// a "none (…)" / "error" sentinel.
    pub model_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PolicyCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_minors: Option<bool>,
}

impl Verdict {
    /// Build a verdict from a normalized oracle payload.
    pub fn from_oracle(payload: OracleVerdict, model_used: &str) -> Self {
        Self {
            is_safe: payload.is_safe,
            moderation_status: ModerationStatus::from_is_safe(payload.is_safe),
            flag_reason: payload.flag_reason,
            model_used: model_used.to_string(),
            category: payload
                .category
                .as_deref()
                .and_then(PolicyCategory::from_label),
            detected_minors: payload.detected_minors,
        }
    }

    /// An approved verdict with no annotation (e.g. audio pass-through).
    pub fn approved(model_used: &str) -> Self {
        Self {
            is_safe: true,
            moderation_status: ModerationStatus::Approved,
            flag_reason: None,
            model_used: model_used.to_string(),
            category: None,
            detected_minors: None,
        }
    }

    /// An approved verdict annotated with why no real analysis ran.
    pub fn approved_with_reason(reason: &str, model_used: &str) -> Self {
        Self {
            flag_reason: Some(reason.to_string()),
            ..Self::approved(model_used)
        }
    }

    /// The fail-open verdict: moderation failures never block users, so
    /// the cause is embedded in `flag_reason` for observability and the
    /// content is approved.
    pub fn fail_open(cause: &str) -> Self {
        Self::approved_with_reason(&format!("Agent Error: {cause}"), "error")
    }
}
