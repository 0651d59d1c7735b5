use axum::Json;
use serde_json::{json, Value};

use crate::badges::available_badges;

/// GET /api/v1/badges
/// Returns the badge catalogue for the presentation layer: id, label, icon
/// identifier, and category. Instruction fragments stay server-side.
pub async fn list_badges_handler() -> Json<Value> {
    Json(json!({ "badges": available_badges() }))
}
