//! Aggregate queries backing the dashboard endpoint.

use sqlx::PgPool;

use crate::models::dashboard::{DashboardSummary, StatusCount};
use crate::models::outreach_email::OutreachEmail;
use crate::models::target::Target;

/// How many recent rows the dashboard shows per entity.
const RECENT_LIMIT: i64 = 10;

/// Read-only aggregate queries across all four tables.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Collect totals, by-status breakdowns, and recent activity.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        let (total_platforms,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM platforms")
            .fetch_one(pool)
            .await?;
        let (total_targets,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM targets")
            .fetch_one(pool)
            .await?;
        let (total_campaigns,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM campaigns")
            .fetch_one(pool)
            .await?;
        let (total_emails,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM outreach_emails")
            .fetch_one(pool)
            .await?;

        let targets_by_status = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM targets GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await?;

        let emails_by_status = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM outreach_emails
             GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await?;

        let recent_emails = sqlx::query_as::<_, OutreachEmail>(
            "SELECT id, target_id, campaign_id, recipient_email, subject, body, status,
                    sent_at, provider_message_id, created_at, updated_at
             FROM outreach_emails ORDER BY created_at DESC LIMIT $1",
        )
        .bind(RECENT_LIMIT)
        .fetch_all(pool)
        .await?;

        let recent_targets = sqlx::query_as::<_, Target>(
            "SELECT id, platform_id, target_url, target_page_title, our_url, anchor_text,
                    status, priority, notes, created_at, updated_at
             FROM targets ORDER BY created_at DESC LIMIT $1",
        )
        .bind(RECENT_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(DashboardSummary {
            total_platforms,
            total_targets,
            total_campaigns,
            total_emails,
            targets_by_status,
            emails_by_status,
            recent_emails,
            recent_targets,
        })
    }
}
