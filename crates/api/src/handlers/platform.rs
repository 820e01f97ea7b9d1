//! Handlers for the `/platforms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use linkreach_core::error::CoreError;
use linkreach_core::types::DbId;
use linkreach_core::validate::FieldErrors;
use linkreach_db::models::platform::{Platform, PlatformInput};
use linkreach_db::repositories::PlatformRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn validate(input: &PlatformInput) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.require("name", &input.name);
    errors.require("url", &input.url);
    errors.url("url", Some(&input.url));
    errors.url("live_url", input.live_url.as_deref());
    errors.email("contact_email", input.contact_email.as_deref());
    errors.into_result().map_err(AppError::Validation)
}

/// POST /api/v1/platforms
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PlatformInput>,
) -> AppResult<(StatusCode, Json<Platform>)> {
    validate(&input)?;
    let platform = PlatformRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(platform)))
}

/// GET /api/v1/platforms
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Platform>>> {
    let platforms = PlatformRepo::list(&state.pool).await?;
    Ok(Json(platforms))
}

/// GET /api/v1/platforms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Platform>> {
    let platform = PlatformRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id,
        }))?;
    Ok(Json(platform))
}

/// PUT /api/v1/platforms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PlatformInput>,
) -> AppResult<Json<Platform>> {
    validate(&input)?;
    let platform = PlatformRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id,
        }))?;
    Ok(Json(platform))
}

/// DELETE /api/v1/platforms/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PlatformRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id,
        }))
    }
}

/// Response payload for the bulk delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteAllResult {
    pub deleted: u64,
}

/// POST /api/v1/platforms/delete-all
///
/// Remove every platform. Dependent targets and emails go with them via
/// cascading foreign keys.
pub async fn delete_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DeleteAllResult>>> {
    let deleted = PlatformRepo::delete_all(&state.pool).await?;
    tracing::info!(deleted, "Deleted all platforms");
    Ok(Json(DataResponse {
        data: DeleteAllResult { deleted },
    }))
}
