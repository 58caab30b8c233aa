use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use serde_json::Value;
use service_core::error::AppError;

use crate::models::{ContactPayload, ContactRecord, ContactResponse};
use crate::startup::AppState;

pub const CONTACT_FAULT: &str = "Could not save.";

/// `POST /api/contact`: best-effort forward of a submission to the sheet webhook.
///
/// The forward is awaited but its outcome never changes the response.
#[tracing::instrument(skip_all)]
pub async fn contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let body: Value =
        serde_json::from_slice(&body).map_err(|e| AppError::internal(CONTACT_FAULT, e))?;

    let payload = match body {
        Value::Object(_) => {
            serde_json::from_value::<ContactPayload>(body)
                .map_err(|e| AppError::internal(CONTACT_FAULT, e))?
        }
        Value::Null => {
            return Err(AppError::internal(
                CONTACT_FAULT,
                anyhow::anyhow!("request body is null"),
            ))
        }
        _ => ContactPayload::default(),
    };

    let record = ContactRecord::new(payload, Utc::now());
    let outcome = state.webhook.forward(&record).await;
    tracing::debug!(?outcome, "Contact forward attempted");

    Ok(Json(ContactResponse { ok: true }))
}
