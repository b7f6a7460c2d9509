// Content policy — one rule table shared across modalities.
//
// The text and image prompts share most of their policy; keeping the rules
// in a single table parameterized by modality prevents the prompts from
// drifting apart as the policy evolves. Only the delivery (inline text vs.
// attached media) and the modality-specific rules differ.

/// Apparent age below which a person in an image always triggers a flag.
pub const MANDATORY_FLAG_AGE: u8 = 18;

/// Apparent age below which a borderline-context image is flagged for
/// manual review rather than auto-approved.
pub const REVIEW_FLAG_AGE: u8 = 21;

/// Which prompt variant to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Text,
    Image,
}

/// Policy rules that apply to every modality.
const SHARED_RULES: &[&str] = &[
    "Hate speech, harassment, or bullying",
    "Sexually explicit or NSFW content",
    "Violence, gore, self-harm, or dangerous and illegal acts",
    "Severe profanity (mild PG-13 language is okay)",
    "Personal information disclosure (phone numbers, addresses)",
    "Spam or advertising",
    "Anything that endangers minors",
];

/// Rules that only make sense for visual content.
fn image_rules() -> Vec<String> {
    vec![
        "Nudity or partial nudity (swimwear is acceptable only in a clear beach or pool setting)"
            .to_string(),
        format!(
            "Anyone who appears under {MANDATORY_FLAG_AGE} in a suggestive or unsafe context — \
             always flag and set detected_minors"
        ),
        format!(
            "Anyone who appears under {REVIEW_FLAG_AGE} in a borderline context — \
             flag for manual review"
        ),
        "Hate symbols or offensive gestures".to_string(),
        "Weapons brandished or used in a threatening way".to_string(),
        "Visible personal or identifying information (documents, license plates, home addresses)"
            .to_string(),
    ]
}

const CATEGORY_LABELS: &str = "nudity|age|violence|spam|privacy|hate|sexual|safe";

/// Build the policy prompt for a scan.
///
/// `input` is the user text to embed inline (text modality only — media
/// travels as a separate request part). The prompt demands a bare JSON
/// object; the normalizer still tolerates fence wrapping because models
/// add it anyway.
pub fn prompt_for(modality: Modality, input: Option<&str>) -> String {
    let mut prompt = String::from(
        "Role: Content Safety Agent for a family-friendly walking and exploration app.\n",
    );

    match modality {
        Modality::Text => {
            prompt.push_str("Task: Analyze the following text for app-store compliance.\n")
        }
        Modality::Image => {
            prompt.push_str("Task: Analyze this image for app-store compliance.\n")
        }
    }

    prompt.push_str("\nStrictly flag:\n");
    for rule in SHARED_RULES {
        prompt.push_str("- ");
        prompt.push_str(rule);
        prompt.push('\n');
    }
    if modality == Modality::Image {
        for rule in image_rules() {
            prompt.push_str("- ");
            prompt.push_str(&rule);
            prompt.push('\n');
        }
    }

    if let Some(text) = input {
        prompt.push_str("\nInput text: \"");
        prompt.push_str(text);
        prompt.push_str("\"\n");
    }

    prompt.push_str("\nOutput ONLY valid JSON:\n");
    match modality {
        Modality::Text => prompt.push_str(&format!(
            "{{\"is_safe\": true/false, \
             \"flag_reason\": \"short explanation if flagged, else null\", \
             \"category\": \"{CATEGORY_LABELS}\"}}"
        )),
        Modality::Image => prompt.push_str(&format!(
            "{{\"is_safe\": true/false, \
             \"flag_reason\": \"short explanation if flagged, else null\", \
             \"category\": \"{CATEGORY_LABELS}\", \
             \"detected_minors\": true/false}}"
        )),
    }

    prompt
}
