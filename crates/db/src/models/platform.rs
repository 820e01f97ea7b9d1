//! Platform entity model and DTO.

use chrono::NaiveDate;
use linkreach_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A platform row from the `platforms` table: an external site that might
/// publish content and link back.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Platform {
    pub id: DbId,
    pub name: String,
    pub url: String,
    pub tier: Option<String>,
    pub submission_type: Option<String>,
    pub topic_to_submit: Option<String>,
    pub difficulty: Option<String>,
    pub contact_email: Option<String>,
    pub contact_name: Option<String>,
    pub pitch_sent_date: Option<NaiveDate>,
    pub article_sent_date: Option<NaiveDate>,
    pub follow_up_1: Option<NaiveDate>,
    pub follow_up_2: Option<NaiveDate>,
    pub response_date: Option<NaiveDate>,
    /// Free-form outreach pipeline status (spreadsheet-imported), defaults
    /// to `Not Started`.
    pub status: String,
    pub publication_date: Option<NaiveDate>,
    pub live_url: Option<String>,
    pub backlink_confirmed: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully overwriting a platform.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformInput {
    pub name: String,
    pub url: String,
    pub tier: Option<String>,
    pub submission_type: Option<String>,
    pub topic_to_submit: Option<String>,
    pub difficulty: Option<String>,
    pub contact_email: Option<String>,
    pub contact_name: Option<String>,
    pub pitch_sent_date: Option<NaiveDate>,
    pub article_sent_date: Option<NaiveDate>,
    pub follow_up_1: Option<NaiveDate>,
    pub follow_up_2: Option<NaiveDate>,
    pub response_date: Option<NaiveDate>,
    /// Defaults to `Not Started` if omitted.
    pub status: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub backlink_confirmed: bool,
    pub notes: Option<String>,
}
