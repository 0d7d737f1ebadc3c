use axum::{extract::State, http::StatusCode, Json};

use crate::dto::submission_dto::{SubmitSalaryRequest, SubmitSalaryResponse};
use crate::error::{Error, Result};
use crate::middleware::in_flight::MSG_IN_FLIGHT;
use crate::utils::validation::validate_submission;
use crate::AppState;

/// Single write path of the whole system: run the ordered validation chain,
/// then hand the normalized record to the upsert sink. Exactly one
/// user-facing error per failed attempt.
pub async fn submit_salary(
    State(state): State<AppState>,
    Json(payload): Json<SubmitSalaryRequest>,
) -> Result<impl axum::response::IntoResponse> {
    let record = validate_submission(&payload)?;

    // Advisory guard: refuse a second submission from the same session while
    // one is being saved. The permit is released on drop, success or not.
    let _permit = match payload.session_id.as_deref() {
        Some(session) if !session.is_empty() => Some(
            state
                .submission_guard
                .try_acquire(session)
                .ok_or_else(|| Error::InFlight(MSG_IN_FLIGHT.to_string()))?,
        ),
        _ => None,
    };

    let saved = state.submission_service.upsert(record).await.map_err(|e| {
        tracing::error!(error = ?e, "failed to save salary submission");
        e
    })?;

    tracing::info!(id = %saved.id, email = %saved.email, "salary submission saved");

    Ok((
        StatusCode::CREATED,
        Json(SubmitSalaryResponse {
            id: saved.id,
            email: saved.email,
            salario_bruto: saved.salario_bruto,
            status: "success".into(),
        }),
    ))
}
