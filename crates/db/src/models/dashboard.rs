//! Aggregate types for the dashboard endpoint.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::outreach_email::OutreachEmail;
use crate::models::target::Target;

/// A status value with its row count, from a GROUP BY query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Everything the dashboard shows in one payload.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_platforms: i64,
    pub total_targets: i64,
    pub total_campaigns: i64,
    pub total_emails: i64,
    pub targets_by_status: Vec<StatusCount>,
    pub emails_by_status: Vec<StatusCount>,
    pub recent_emails: Vec<OutreachEmail>,
    pub recent_targets: Vec<Target>,
}
