//! Integration tests for the email send flow: provider hand-off, sent
//! stamping, target promotion, and the already-sent guard.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, post_json, put_json, FailingMailer, RecordingMailer};
use sqlx::PgPool;

async fn seed_draft(pool: &PgPool) -> (i64, i64) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/platforms",
        serde_json::json!({"name": "Host", "url": "https://example.com"}),
    )
    .await;
    let platform_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/targets",
        serde_json::json!({
            "platform_id": platform_id,
            "target_url": "https://example.com/guest-posts",
        }),
    )
    .await;
    let target_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/emails",
        serde_json::json!({
            "target_id": target_id,
            "recipient_email": "editor@example.com",
            "subject": "Guest post pitch",
            "body": "<p>Hello!</p>",
        }),
    )
    .await;
    let email_id = body_json(response).await["id"].as_i64().unwrap();

    (email_id, target_id)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_send_stamps_email_and_promotes_target(pool: PgPool) {
    let (email_id, target_id) = seed_draft(&pool).await;

    let mailer = Arc::new(RecordingMailer::default());
    let app = common::build_test_app_with_mailer(pool.clone(), mailer.clone());
    let response = post_empty(app, &format!("/api/v1/emails/{email_id}/send")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "sent");
    assert!(json["sent_at"].is_string());
    assert_eq!(
        json["provider_message_id"],
        "<test-message-id@linkreach.test>"
    );

    // Exactly one provider call, with the draft's recipient and subject.
    let sent = mailer.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "editor@example.com");
    assert_eq!(sent[0].1, "Guest post pitch");

    // Target moved from identified to contacted in the same operation.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/targets/{target_id}")).await;
    assert_eq!(body_json(response).await["status"], "contacted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_send_leaves_non_identified_target_alone(pool: PgPool) {
    let (email_id, target_id) = seed_draft(&pool).await;

    // Move the target past the promotion point first.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/targets/{target_id}")).await;
    let target = body_json(response).await;
    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/targets/{target_id}"),
        serde_json::json!({
            "platform_id": target["platform_id"],
            "target_url": target["target_url"],
            "status": "approved",
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/emails/{email_id}/send")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/targets/{target_id}")).await;
    assert_eq!(body_json(response).await["status"], "approved");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_send_twice_returns_409_without_provider_call(pool: PgPool) {
    let (email_id, _) = seed_draft(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/emails/{email_id}/send")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second attempt: conflict, and the provider must not be contacted.
    let mailer = Arc::new(RecordingMailer::default());
    let app = common::build_test_app_with_mailer(pool, mailer.clone());
    let response = post_empty(app, &format!("/api/v1/emails/{email_id}/send")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("already sent"));
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_provider_failure_returns_502_and_keeps_draft(pool: PgPool) {
    let (email_id, _) = seed_draft(&pool).await;

    let app = common::build_test_app_with_mailer(pool.clone(), Arc::new(FailingMailer));
    let response = post_empty(app, &format!("/api/v1/emails/{email_id}/send")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "MAIL_ERROR");

    // The record is untouched and can be sent again later.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/emails/{email_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "draft");
    assert!(json["sent_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sent_email_rejects_edits(pool: PgPool) {
    let (email_id, target_id) = seed_draft(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/emails/{email_id}/send")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/emails/{email_id}"),
        serde_json::json!({
            "target_id": target_id,
            "recipient_email": "editor@example.com",
            "subject": "Changed my mind",
            "body": "Hello",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Subject unchanged.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/emails/{email_id}")).await;
    assert_eq!(body_json(response).await["subject"], "Guest post pitch");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_send_nonexistent_email_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_empty(app, "/api/v1/emails/999999/send").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
