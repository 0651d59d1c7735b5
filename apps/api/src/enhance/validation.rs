//! Response validation for the enhancement pipeline.
//!
//! Two layers: a strict shape check on the provider payload (single
//! non-empty `enhancedPrompt` string field), and a semantic overlap check
//! guarding against the model answering the prompt instead of editing it.

use serde::Serialize;
use serde_json::Value;

/// A single validation failure, serialized into the 422 `details` field.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaIssue {
    pub path: String,
    pub message: String,
}

impl SchemaIssue {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Validates the provider payload against the required output shape and
/// extracts the enhanced text.
///
/// Required shape: a JSON object with an `enhancedPrompt` field holding a
/// string that is non-empty after trimming.
pub fn validate_enhanced_payload(payload: &Value) -> Result<String, Vec<SchemaIssue>> {
    let object = match payload.as_object() {
        Some(o) => o,
        None => {
            return Err(vec![SchemaIssue::new("", "Expected a JSON object")]);
        }
    };

    let field = match object.get("enhancedPrompt") {
        Some(f) => f,
        None => {
            return Err(vec![SchemaIssue::new(
                "enhancedPrompt",
                "Required field is missing",
            )]);
        }
    };

    let text = match field.as_str() {
        Some(t) => t,
        None => {
            return Err(vec![SchemaIssue::new(
                "enhancedPrompt",
                "Expected a string",
            )]);
        }
    };

    if text.trim().is_empty() {
        return Err(vec![SchemaIssue::new(
            "enhancedPrompt",
            "Enhanced prompt cannot be empty",
        )]);
    }

    Ok(text.to_string())
}

/// Maximum allowed growth of the enhanced text, in whitespace-separated
/// words. A copy-edit that triples the length is almost certainly the model
/// answering the prompt rather than editing it.
const MAX_GROWTH_FACTOR: usize = 3;

/// Minimum word length considered a "key word" for the overlap check.
const KEY_WORD_MIN_LEN: usize = 4;

/// Semantic sanity check: does `enhanced` still look like a revision of
/// `original`?
///
/// Passes when the enhanced word count is at most `MAX_GROWTH_FACTOR` times
/// the original's, and at least one key word (alphanumeric run of
/// `KEY_WORD_MIN_LEN`+ chars) from the original survives, case-insensitively.
/// Originals with no key words pass the overlap check vacuously.
pub fn looks_like_enhancement(original: &str, enhanced: &str) -> bool {
    let original_words = original.split_whitespace().count();
    let enhanced_words = enhanced.split_whitespace().count();

    if enhanced_words > original_words * MAX_GROWTH_FACTOR {
        return false;
    }

    let original_lower = original.to_lowercase();
    let key_words: Vec<&str> = original_lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= KEY_WORD_MIN_LEN)
        .collect();

    if key_words.is_empty() {
        return true;
    }

    let enhanced_lower = enhanced.to_lowercase();
    key_words.iter().any(|w| enhanced_lower.contains(w))
}
