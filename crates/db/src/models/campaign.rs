//! Campaign entity model and DTO.

use linkreach_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A campaign row from the `campaigns` table: a named grouping of outreach
/// emails.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// One of the `VALID_CAMPAIGN_STATUSES` strings; defaults to `draft`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully overwriting a campaign.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignInput {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
}
