//! Axum route handler for the Enhancement API.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::enhance::validation::{
    looks_like_enhancement, validate_enhanced_payload, SchemaIssue,
};
use crate::errors::AppError;
use crate::llm_client::CompletionService;
use crate::prompt::{compose_system_prompt, user_message};
use crate::state::AppState;

#[derive(Debug)]
pub struct EnhanceRequest {
    pub prompt: String,
    /// Selected preference badge ids, in selection order. Unknown ids are
    /// tolerated and contribute nothing.
    pub selected_badges: Vec<String>,
}

/// Parses the request body by hand so a missing or non-string `prompt` is a
/// 400 validation error, not an extractor rejection. `selectedBadges` is
/// optional; non-string entries are skipped like unknown ids.
pub fn parse_enhance_request(body: &Value) -> Result<EnhanceRequest, AppError> {
    let prompt = match body.get("prompt").and_then(Value::as_str) {
        Some(p) => p.to_string(),
        None => {
            return Err(AppError::Validation(
                "Prompt is required and must be a non-empty string".to_string(),
            ));
        }
    };

    let selected_badges = body
        .get("selectedBadges")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(EnhanceRequest {
        prompt,
        selected_badges,
    })
}

/// POST /api/v1/enhance
///
/// Enhances the prompt text and returns it as a bare JSON string.
/// Responses are never cacheable: identical inputs may legitimately yield
/// different enhancements.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let request = parse_enhance_request(&body)?;
    let enhanced = enhance_prompt(state.llm.as_ref(), &request).await?;

    let mut response = Json(enhanced).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    Ok(response)
}

/// Full enhancement pipeline: validate input → compose system prompt →
/// call the completion service → validate the structured response.
///
/// Returns only the enhanced text, never the provider envelope.
pub async fn enhance_prompt(
    llm: &dyn CompletionService,
    request: &EnhanceRequest,
) -> Result<String, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation(
            "Prompt is required and must be a non-empty string".to_string(),
        ));
    }

    let system_prompt = compose_system_prompt(&request.selected_badges);
    debug!(
        badges = request.selected_badges.len(),
        "composed system prompt ({} chars)",
        system_prompt.len()
    );

    let payload = llm
        .generate(&system_prompt, &user_message(&request.prompt))
        .await?;

    let enhanced = validate_enhanced_payload(&payload)
        .map_err(|issues| AppError::SchemaViolation("Invalid response format".to_string(), issues))?;

    if !looks_like_enhancement(&request.prompt, &enhanced) {
        return Err(AppError::SchemaViolation(
            "Invalid response format".to_string(),
            vec![SchemaIssue {
                path: "enhancedPrompt".to_string(),
                message: "Response does not look like a revision of the original prompt"
                    .to_string(),
            }],
        ));
    }

    Ok(enhanced)
}
