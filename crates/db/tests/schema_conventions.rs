//! Schema convention checks, run against the migrated database:
//! bigint primary keys, timestamptz audit columns, TEXT over VARCHAR,
//! indexed foreign keys, and CHECK-constrained status columns.

use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// Every table (except _sqlx_migrations) must have created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// No character varying columns should exist — TEXT is preferred.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(
        rows.is_empty(),
        "Found VARCHAR columns (should use TEXT): {:?}",
        rows
    );
}

/// Every foreign key column must have a corresponding index.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_have_indexes(pool: PgPool) {
    let fk_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT DISTINCT
             tc.table_name,
             kcu.column_name
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
             ON tc.constraint_name = kcu.constraint_name
             AND tc.table_schema = kcu.table_schema
         WHERE tc.constraint_type = 'FOREIGN KEY'
           AND tc.table_schema = 'public'
         ORDER BY tc.table_name, kcu.column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!fk_columns.is_empty());
    for (table, column) in &fk_columns {
        let indexed: Option<(String,)> = sqlx::query_as(&format!(
            "SELECT indexname
             FROM pg_indexes
             WHERE schemaname = 'public'
               AND tablename = '{table}'
               AND indexdef LIKE '%({column}%'"
        ))
        .fetch_optional(&pool)
        .await
        .unwrap();

        assert!(
            indexed.is_some(),
            "FK column {table}.{column} has no index"
        );
    }
}

/// Constrained status columns reject values outside their CHECK lists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_check_constraints(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO campaigns (name, status) VALUES ('Bad', 'running')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "campaigns.status CHECK should reject 'running'");

    sqlx::query("INSERT INTO platforms (name, url) VALUES ('Host', 'https://example.com')")
        .execute(&pool)
        .await
        .unwrap();

    let result = sqlx::query(
        "INSERT INTO targets (platform_id, target_url, status)
         SELECT id, 'https://example.com/a', 'wishful' FROM platforms LIMIT 1",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "targets.status CHECK should reject 'wishful'");

    let result = sqlx::query(
        "INSERT INTO targets (platform_id, target_url, priority)
         SELECT id, 'https://example.com/a', 'urgent' FROM platforms LIMIT 1",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "targets.priority CHECK should reject 'urgent'");
}
