//! Repository for the `outreach_emails` table.

use linkreach_core::types::DbId;
use sqlx::PgPool;

use crate::models::outreach_email::{OutreachEmail, OutreachEmailInput};

const COLUMNS: &str = "id, target_id, campaign_id, recipient_email, subject, body, status, \
     sent_at, provider_message_id, created_at, updated_at";

/// Provides CRUD operations and the send state transition for outreach
/// emails.
pub struct OutreachEmailRepo;

impl OutreachEmailRepo {
    /// Insert a new draft email, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &OutreachEmailInput,
    ) -> Result<OutreachEmail, sqlx::Error> {
        let query = format!(
            "INSERT INTO outreach_emails (target_id, campaign_id, recipient_email, subject, body)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutreachEmail>(&query)
            .bind(input.target_id)
            .bind(input.campaign_ref())
            .bind(&input.recipient_email)
            .bind(&input.subject)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find an email by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OutreachEmail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM outreach_emails WHERE id = $1");
        sqlx::query_as::<_, OutreachEmail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List emails, optionally filtered by status, newest first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<OutreachEmail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM outreach_emails
             WHERE $1::text IS NULL OR status = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, OutreachEmail>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Fully overwrite a draft email from the input (edit form semantics).
    ///
    /// The caller is responsible for rejecting edits to sent records; the
    /// `status = 'draft'` guard here is the storage-level backstop.
    /// Returns `None` if no editable row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &OutreachEmailInput,
    ) -> Result<Option<OutreachEmail>, sqlx::Error> {
        let query = format!(
            "UPDATE outreach_emails SET
                target_id = $2, campaign_id = $3, recipient_email = $4,
                subject = $5, body = $6
             WHERE id = $1 AND status = 'draft'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutreachEmail>(&query)
            .bind(id)
            .bind(input.target_id)
            .bind(input.campaign_ref())
            .bind(&input.recipient_email)
            .bind(&input.subject)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete an email by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM outreach_emails WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a successful provider send in one transaction: stamp the
    /// email as sent and promote its target from `identified` to
    /// `contacted` (targets in any other status are left untouched).
    pub async fn mark_sent(
        pool: &PgPool,
        id: DbId,
        target_id: DbId,
        provider_message_id: &str,
    ) -> Result<OutreachEmail, sqlx::Error> {
        let query = format!(
            "UPDATE outreach_emails SET
                status = 'sent', sent_at = NOW(), provider_message_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;

        let email = sqlx::query_as::<_, OutreachEmail>(&query)
            .bind(id)
            .bind(provider_message_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE targets SET status = 'contacted'
             WHERE id = $1 AND status = 'identified'",
        )
        .bind(target_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(email)
    }
}
