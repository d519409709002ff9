use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::submission::parser;

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let fields = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    let submission = Submission::stamp(fields, chrono::Local::now().naive_local());
    let field_count = submission.fields.len();

    state.store.append(submission).await?;

    tracing::info!("Submission received with {field_count} fields");

    Ok(Json(json!({
        "success": true,
        "message": "Message received",
    })))
}
