//! Repository for the `platforms` table.

use linkreach_core::import::ParsedPlatform;
use linkreach_core::types::DbId;
use sqlx::PgPool;

use crate::models::platform::{Platform, PlatformInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, url, tier, submission_type, topic_to_submit, difficulty, \
     contact_email, contact_name, pitch_sent_date, article_sent_date, follow_up_1, \
     follow_up_2, response_date, status, publication_date, live_url, backlink_confirmed, \
     notes, created_at, updated_at";

const INSERT_COLUMNS: &str = "name, url, tier, submission_type, topic_to_submit, difficulty, \
     contact_email, contact_name, pitch_sent_date, article_sent_date, follow_up_1, \
     follow_up_2, response_date, status, publication_date, live_url, backlink_confirmed, notes";

/// Provides CRUD and bulk-import operations for platforms.
pub struct PlatformRepo;

impl PlatformRepo {
    /// Insert a new platform, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `Not Started`.
    pub async fn create(pool: &PgPool, input: &PlatformInput) -> Result<Platform, sqlx::Error> {
        let query = format!(
            "INSERT INTO platforms ({INSERT_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     COALESCE($14, 'Not Started'), $15, $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(&input.name)
            .bind(&input.url)
            .bind(&input.tier)
            .bind(&input.submission_type)
            .bind(&input.topic_to_submit)
            .bind(&input.difficulty)
            .bind(&input.contact_email)
            .bind(&input.contact_name)
            .bind(input.pitch_sent_date)
            .bind(input.article_sent_date)
            .bind(input.follow_up_1)
            .bind(input.follow_up_2)
            .bind(input.response_date)
            .bind(&input.status)
            .bind(input.publication_date)
            .bind(&input.live_url)
            .bind(input.backlink_confirmed)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a platform by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms WHERE id = $1");
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all platforms ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms ORDER BY created_at DESC");
        sqlx::query_as::<_, Platform>(&query).fetch_all(pool).await
    }

    /// Fully overwrite a platform from the input (edit form semantics).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PlatformInput,
    ) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!(
            "UPDATE platforms SET
                name = $2, url = $3, tier = $4, submission_type = $5,
                topic_to_submit = $6, difficulty = $7, contact_email = $8,
                contact_name = $9, pitch_sent_date = $10, article_sent_date = $11,
                follow_up_1 = $12, follow_up_2 = $13, response_date = $14,
                status = COALESCE($15, status), publication_date = $16,
                live_url = $17, backlink_confirmed = $18, notes = $19
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.url)
            .bind(&input.tier)
            .bind(&input.submission_type)
            .bind(&input.topic_to_submit)
            .bind(&input.difficulty)
            .bind(&input.contact_email)
            .bind(&input.contact_name)
            .bind(input.pitch_sent_date)
            .bind(input.article_sent_date)
            .bind(input.follow_up_1)
            .bind(input.follow_up_2)
            .bind(input.response_date)
            .bind(&input.status)
            .bind(input.publication_date)
            .bind(&input.live_url)
            .bind(input.backlink_confirmed)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a platform by ID, cascading to its targets and their emails.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM platforms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bulk delete every platform (and, by cascade, all targets and emails).
    /// Returns the number of platforms removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM platforms").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Insert all parsed import rows in a single transaction.
    ///
    /// Either every row commits or none do; per-row skip decisions were
    /// already made by the import parser before this is called.
    pub async fn import_rows(
        pool: &PgPool,
        rows: &[ParsedPlatform],
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "INSERT INTO platforms ({INSERT_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     COALESCE($14, 'Not Started'), $15, $16, $17, $18)"
        );

        let mut tx = pool.begin().await?;
        for row in rows {
            sqlx::query(&query)
                .bind(&row.name)
                .bind(&row.url)
                .bind(&row.tier)
                .bind(&row.submission_type)
                .bind(&row.topic_to_submit)
                .bind(&row.difficulty)
                .bind(&row.contact_email)
                .bind(&row.contact_name)
                .bind(row.pitch_sent_date)
                .bind(row.article_sent_date)
                .bind(row.follow_up_1)
                .bind(row.follow_up_2)
                .bind(row.response_date)
                .bind(&row.status)
                .bind(row.publication_date)
                .bind(&row.live_url)
                .bind(row.backlink_confirmed)
                .bind(&row.notes)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        Ok(rows.len() as u64)
    }
}
