//! Handlers for the `/emails` resource.
//!
//! The send endpoint is the one place the service talks to the outside
//! world: it hands the draft to the configured [`Mailer`] and only stamps
//! the record as sent after the provider accepts it.
//!
//! [`Mailer`]: linkreach_mail::Mailer

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use linkreach_core::error::CoreError;
use linkreach_core::status::{email_is_editable, VALID_EMAIL_STATUSES};
use linkreach_core::types::DbId;
use linkreach_core::validate::FieldErrors;
use linkreach_db::models::outreach_email::{OutreachEmail, OutreachEmailInput};
use linkreach_db::repositories::OutreachEmailRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn validate(input: &OutreachEmailInput) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.require("recipient_email", &input.recipient_email);
    errors.email("recipient_email", Some(&input.recipient_email));
    errors.require("subject", &input.subject);
    errors.require("body", &input.body);
    errors.into_result().map_err(AppError::Validation)
}

/// Query parameters for the email list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

/// POST /api/v1/emails
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<OutreachEmailInput>,
) -> AppResult<(StatusCode, Json<OutreachEmail>)> {
    validate(&input)?;
    let email = OutreachEmailRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(email)))
}

/// GET /api/v1/emails?status=...
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<OutreachEmail>>> {
    if let Some(status) = params.status.as_deref() {
        if !VALID_EMAIL_STATUSES.contains(&status) {
            return Err(AppError::BadRequest(format!(
                "Unknown email status '{status}'"
            )));
        }
    }
    let emails = OutreachEmailRepo::list(&state.pool, params.status.as_deref()).await?;
    Ok(Json(emails))
}

/// GET /api/v1/emails/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OutreachEmail>> {
    let email = OutreachEmailRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Email", id }))?;
    Ok(Json(email))
}

/// PUT /api/v1/emails/{id}
///
/// Full overwrite of a draft. Sent records are frozen and edits to them
/// are rejected with a conflict.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<OutreachEmailInput>,
) -> AppResult<Json<OutreachEmail>> {
    let existing = OutreachEmailRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Email", id }))?;
    if !email_is_editable(&existing.status) {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot edit an email that has already been sent".to_string(),
        )));
    }

    validate(&input)?;
    let email = OutreachEmailRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Email", id }))?;
    Ok(Json(email))
}

/// DELETE /api/v1/emails/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = OutreachEmailRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Email", id }))
    }
}

/// POST /api/v1/emails/{id}/send
///
/// Hand the draft to the mail provider. On provider acceptance the record
/// is stamped `sent` and its target promoted from `identified` to
/// `contacted` in one transaction. On provider failure the record stays a
/// draft and the response is a 502; the provider is never contacted for a
/// record that is already sent.
pub async fn send(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OutreachEmail>> {
    let email = OutreachEmailRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Email", id }))?;

    if email.sent_at.is_some() || email.status == "sent" {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already sent".to_string(),
        )));
    }

    let sent = state
        .mailer
        .send(&email.recipient_email, &email.subject, &email.body)
        .await?;

    let updated =
        OutreachEmailRepo::mark_sent(&state.pool, id, email.target_id, &sent.provider_message_id)
            .await?;

    tracing::info!(
        email_id = id,
        target_id = email.target_id,
        provider_message_id = %sent.provider_message_id,
        "Outreach email sent"
    );

    Ok(Json(updated))
}
