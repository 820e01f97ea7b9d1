//! Handlers for the `/campaigns` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use linkreach_core::error::CoreError;
use linkreach_core::status::VALID_CAMPAIGN_STATUSES;
use linkreach_core::types::DbId;
use linkreach_core::validate::FieldErrors;
use linkreach_db::models::campaign::{Campaign, CampaignInput};
use linkreach_db::repositories::CampaignRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn validate(input: &CampaignInput) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.require("name", &input.name);
    if let Some(status) = input.status.as_deref() {
        errors.one_of("status", status, VALID_CAMPAIGN_STATUSES);
    }
    errors.into_result().map_err(AppError::Validation)
}

/// POST /api/v1/campaigns
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CampaignInput>,
) -> AppResult<(StatusCode, Json<Campaign>)> {
    validate(&input)?;
    let campaign = CampaignRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// GET /api/v1/campaigns
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Campaign>>> {
    let campaigns = CampaignRepo::list(&state.pool).await?;
    Ok(Json(campaigns))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Campaign>> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;
    Ok(Json(campaign))
}

/// PUT /api/v1/campaigns/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CampaignInput>,
) -> AppResult<Json<Campaign>> {
    validate(&input)?;
    let campaign = CampaignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;
    Ok(Json(campaign))
}

/// DELETE /api/v1/campaigns/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CampaignRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))
    }
}
