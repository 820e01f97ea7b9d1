//! Target entity model and DTO.

use linkreach_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A target row from the `targets` table: a specific link placement
/// opportunity on a platform.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Target {
    pub id: DbId,
    pub platform_id: DbId,
    pub target_url: String,
    pub target_page_title: Option<String>,
    pub our_url: Option<String>,
    pub anchor_text: Option<String>,
    /// One of the `VALID_TARGET_STATUSES` strings; defaults to `identified`.
    pub status: String,
    /// One of the `VALID_TARGET_PRIORITIES` strings; defaults to `medium`.
    pub priority: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully overwriting a target.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetInput {
    pub platform_id: DbId,
    pub target_url: String,
    pub target_page_title: Option<String>,
    pub our_url: Option<String>,
    pub anchor_text: Option<String>,
    /// Defaults to `identified` if omitted.
    pub status: Option<String>,
    /// Defaults to `medium` if omitted.
    pub priority: Option<String>,
    pub notes: Option<String>,
}
