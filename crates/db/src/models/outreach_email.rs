//! Outreach email entity model and DTO.

use linkreach_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An outreach email row from the `outreach_emails` table.
///
/// Once `status` is `sent` the record is frozen: edits are rejected and
/// `sent_at` / `provider_message_id` are set exactly once.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutreachEmail {
    pub id: DbId,
    pub target_id: DbId,
    pub campaign_id: Option<DbId>,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    /// One of the `VALID_EMAIL_STATUSES` strings; defaults to `draft`.
    pub status: String,
    pub sent_at: Option<Timestamp>,
    pub provider_message_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully overwriting a draft email.
///
/// `campaign_id` of `0` or `null` both mean "no campaign".
#[derive(Debug, Clone, Deserialize)]
pub struct OutreachEmailInput {
    pub target_id: DbId,
    pub campaign_id: Option<DbId>,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
}

impl OutreachEmailInput {
    /// The campaign reference with the "no campaign" sentinel collapsed.
    pub fn campaign_ref(&self) -> Option<DbId> {
        match self.campaign_id {
            Some(0) | None => None,
            other => other,
        }
    }
}
