// Unit tests for oracle reply normalization.
//
// The normalizer is the single place free-form model output becomes a
// structured payload, so formatting-noise tolerance and the typed failure
// modes both live here.

use palisade::scan::normalize::{extract_verdict, NormalizeError};

// ============================================================
// Successful extraction
// ============================================================

#[test]
fn bare_json_parses() {
    let verdict = extract_verdict(r#"{"is_safe": true, "flag_reason": null}"#).unwrap();
    assert!(verdict.is_safe);
    assert_eq!(verdict.flag_reason, None);
}

#[test]
fn json_fence_is_stripped() {
    let raw = "```json\n{\"is_safe\": true, \"flag_reason\": null}\n```";
    let verdict = extract_verdict(raw).unwrap();
    assert!(verdict.is_safe);
}

#[test]
fn anonymous_fence_is_stripped() {
    let raw = "```\n{\"is_safe\": false, \"flag_reason\": \"Spam\"}\n```";
    let verdict = extract_verdict(raw).unwrap();
    assert!(!verdict.is_safe);
    assert_eq!(verdict.flag_reason.as_deref(), Some("Spam"));
}

#[test]
fn fenced_and_bare_replies_normalize_identically() {
    let bare = extract_verdict(r#"{"is_safe": false, "flag_reason": "Hate"}"#).unwrap();
    let fenced =
        extract_verdict("```json\n{\"is_safe\": false, \"flag_reason\": \"Hate\"}\n```").unwrap();
    assert_eq!(bare.is_safe, fenced.is_safe);
    assert_eq!(bare.flag_reason, fenced.flag_reason);
}

#[test]
fn prose_preamble_falls_back_to_brace_slice() {
    let raw = "Here is my analysis: {\"is_safe\": true, \"flag_reason\": null} Hope that helps!";
    let verdict = extract_verdict(raw).unwrap();
    assert!(verdict.is_safe);
}

#[test]
fn whitespace_padding_is_tolerated() {
    let verdict = extract_verdict("   \n {\"is_safe\": true} \n  ").unwrap();
    assert!(verdict.is_safe);
}

// ============================================================
// Field defaults — strict on partial replies
// ============================================================

#[test]
fn missing_is_safe_defaults_to_unsafe() {
    let verdict = extract_verdict(r#"{"flag_reason": "something"}"#).unwrap();
    assert!(!verdict.is_safe);
}

#[test]
fn empty_object_is_unsafe_with_no_reason() {
    let verdict = extract_verdict("{}").unwrap();
    assert!(!verdict.is_safe);
    assert_eq!(verdict.flag_reason, None);
    assert_eq!(verdict.category, None);
    assert_eq!(verdict.detected_minors, None);
}

#[test]
fn auxiliary_fields_carry_through() {
    let raw = r#"{"is_safe": false, "flag_reason": "Minor visible",
                  "category": "age", "detected_minors": true}"#;
    let verdict = extract_verdict(raw).unwrap();
    assert_eq!(verdict.category.as_deref(), Some("age"));
    assert_eq!(verdict.detected_minors, Some(true));
}

#[test]
fn unknown_extra_fields_are_ignored() {
    let raw = r#"{"is_safe": true, "confidence": 0.93, "notes": ["a", "b"]}"#;
    let verdict = extract_verdict(raw).unwrap();
    assert!(verdict.is_safe);
}

// ============================================================
// Hard failures
// ============================================================

#[test]
fn prose_without_payload_is_no_payload() {
    let err = extract_verdict("I cannot analyze this content.").unwrap_err();
    assert!(matches!(err, NormalizeError::NoPayload));
}

#[test]
fn empty_reply_is_no_payload() {
    let err = extract_verdict("").unwrap_err();
    assert!(matches!(err, NormalizeError::NoPayload));
}

#[test]
fn truncated_json_is_malformed() {
    let err = extract_verdict(r#"{"is_safe": tr"#).unwrap_err();
    assert!(matches!(err, NormalizeError::Malformed(_)));
}

#[test]
fn wrong_field_type_is_malformed() {
    let err = extract_verdict(r#"{"is_safe": "yes"}"#).unwrap_err();
    assert!(matches!(err, NormalizeError::Malformed(_)));
}
