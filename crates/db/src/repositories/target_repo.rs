//! Repository for the `targets` table.

use linkreach_core::types::DbId;
use sqlx::PgPool;

use crate::models::target::{Target, TargetInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, platform_id, target_url, target_page_title, our_url, anchor_text, \
     status, priority, notes, created_at, updated_at";

/// Provides CRUD operations for link targets.
pub struct TargetRepo;

impl TargetRepo {
    /// Insert a new target, returning the created row.
    ///
    /// `status` defaults to `identified` and `priority` to `medium`.
    pub async fn create(pool: &PgPool, input: &TargetInput) -> Result<Target, sqlx::Error> {
        let query = format!(
            "INSERT INTO targets (platform_id, target_url, target_page_title, our_url,
                                  anchor_text, status, priority, notes)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'identified'),
                     COALESCE($7, 'medium'), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(input.platform_id)
            .bind(&input.target_url)
            .bind(&input.target_page_title)
            .bind(&input.our_url)
            .bind(&input.anchor_text)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a target by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Target>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM targets WHERE id = $1");
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List targets, optionally filtered by status, newest first.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Target>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM targets
             WHERE $1::text IS NULL OR status = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Fully overwrite a target from the input (edit form semantics).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TargetInput,
    ) -> Result<Option<Target>, sqlx::Error> {
        let query = format!(
            "UPDATE targets SET
                platform_id = $2, target_url = $3, target_page_title = $4,
                our_url = $5, anchor_text = $6, status = COALESCE($7, status),
                priority = COALESCE($8, priority), notes = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(input.platform_id)
            .bind(&input.target_url)
            .bind(&input.target_page_title)
            .bind(&input.our_url)
            .bind(&input.anchor_text)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a target by ID, cascading to its emails. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM targets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
