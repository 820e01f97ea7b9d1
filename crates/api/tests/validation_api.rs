//! Integration tests for request payload validation.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_platform_requires_name_and_url(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/platforms",
        serde_json::json!({"name": "", "url": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["name"].is_array());
    assert!(json["fields"]["url"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_platform_rejects_malformed_urls_and_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/platforms",
        serde_json::json!({
            "name": "Tech Blog",
            "url": "not a url",
            "live_url": "also not",
            "contact_email": "nope",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["fields"]["url"].is_array());
    assert!(json["fields"]["live_url"].is_array());
    assert!(json["fields"]["contact_email"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_target_rejects_unknown_status_and_priority(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/targets",
        serde_json::json!({
            "platform_id": 1,
            "target_url": "https://example.com/page",
            "status": "wishful",
            "priority": "urgent",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let status_errors = json["fields"]["status"].as_array().unwrap();
    assert!(status_errors[0].as_str().unwrap().contains("identified"));
    assert!(json["fields"]["priority"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_campaign_rejects_unknown_status(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/campaigns",
        serde_json::json!({"name": "Push", "status": "running"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_email_requires_recipient_subject_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/emails",
        serde_json::json!({
            "target_id": 1,
            "recipient_email": "not-an-email",
            "subject": "",
            "body": "",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["fields"]["recipient_email"].is_array());
    assert!(json["fields"]["subject"].is_array());
    assert!(json["fields"]["body"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validation_failure_persists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/platforms",
        serde_json::json!({"name": "Tech Blog", "url": "bad"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/platforms").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}
