use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

use crate::models::{ReflectRequest, ReflectResponse};
use crate::prompts::SYSTEM_PROMPT;
use crate::services::providers::ProviderError;
use crate::startup::AppState;

pub const PAIRS_REQUIRED: &str = "Three questions and three answers required.";
pub const REFLECTION_FAILED: &str = "Reflection could not form.";
pub const REFLECT_FAULT: &str = "Something went still.";

/// `POST /api/reflect`: turn three question/answer pairs into a reflection.
#[tracing::instrument(skip_all)]
pub async fn reflect(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReflectResponse>, AppError> {
    let body: Value =
        serde_json::from_slice(&body).map_err(|e| AppError::internal(REFLECT_FAULT, e))?;
    if body.is_null() {
        return Err(AppError::internal(
            REFLECT_FAULT,
            anyhow::anyhow!("request body is null"),
        ));
    }

    let request = ReflectRequest::from_value(&body)
        .ok_or_else(|| AppError::BadRequest(PAIRS_REQUIRED.to_string()))?;

    let completion = state
        .provider
        .complete(SYSTEM_PROMPT, &request.user_content())
        .await
        .map_err(|e| match e {
            ProviderError::Upstream { status, body } => {
                tracing::warn!(status, "Completion API rejected the request");
                AppError::BadGateway {
                    message: REFLECTION_FAILED.to_string(),
                    detail: body,
                }
            }
            other => AppError::internal(REFLECT_FAULT, other),
        })?;

    let reflection = completion.text();
    tracing::info!(reflection_len = reflection.len(), "Reflection generated");

    Ok(Json(ReflectResponse { reflection }))
}
