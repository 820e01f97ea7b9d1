//! Handlers for the `/targets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use linkreach_core::error::CoreError;
use linkreach_core::status::{VALID_TARGET_PRIORITIES, VALID_TARGET_STATUSES};
use linkreach_core::types::DbId;
use linkreach_core::validate::FieldErrors;
use linkreach_db::models::target::{Target, TargetInput};
use linkreach_db::repositories::TargetRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn validate(input: &TargetInput) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.require("target_url", &input.target_url);
    errors.url("target_url", Some(&input.target_url));
    errors.url("our_url", input.our_url.as_deref());
    if let Some(status) = input.status.as_deref() {
        errors.one_of("status", status, VALID_TARGET_STATUSES);
    }
    if let Some(priority) = input.priority.as_deref() {
        errors.one_of("priority", priority, VALID_TARGET_PRIORITIES);
    }
    errors.into_result().map_err(AppError::Validation)
}

/// Query parameters for the target list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

/// POST /api/v1/targets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TargetInput>,
) -> AppResult<(StatusCode, Json<Target>)> {
    validate(&input)?;
    let target = TargetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(target)))
}

/// GET /api/v1/targets?status=...
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Target>>> {
    if let Some(status) = params.status.as_deref() {
        if !VALID_TARGET_STATUSES.contains(&status) {
            return Err(AppError::BadRequest(format!(
                "Unknown target status '{status}'"
            )));
        }
    }
    let targets = TargetRepo::list(&state.pool, params.status.as_deref()).await?;
    Ok(Json(targets))
}

/// GET /api/v1/targets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Target>> {
    let target = TargetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Target",
            id,
        }))?;
    Ok(Json(target))
}

/// PUT /api/v1/targets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TargetInput>,
) -> AppResult<Json<Target>> {
    validate(&input)?;
    let target = TargetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Target",
            id,
        }))?;
    Ok(Json(target))
}

/// DELETE /api/v1/targets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TargetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Target",
            id,
        }))
    }
}
