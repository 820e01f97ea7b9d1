//! Integration tests for the spreadsheet/CSV platform import endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_file};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_csv_upload_imports_platforms(pool: PgPool) {
    let csv = "\
Site,URL,Contact Email
Tech Blog,https://techblog.example.com,editor@techblog.example.com
Dev Digest,devdigest.example.com,
,https://anon.example.com,
";

    let app = common::build_test_app(pool.clone());
    let response = post_file(app, "/api/v1/platforms/upload", "sites.csv", csv.as_bytes()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["imported"], 3);
    assert_eq!(json["data"]["skipped"], 0);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/platforms").await;
    let platforms = body_json(response).await;
    let platforms = platforms.as_array().unwrap();
    assert_eq!(platforms.len(), 3);

    // Schemeless URL normalized, nameless row falls back to its URL.
    let dev = platforms
        .iter()
        .find(|p| p["name"] == "Dev Digest")
        .unwrap();
    assert_eq!(dev["url"], "https://devdigest.example.com");
    assert!(platforms
        .iter()
        .any(|p| p["name"] == "https://anon.example.com"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_csv_upload_reports_skipped_rows(pool: PgPool) {
    let csv = "\
Name,Website URL
Good Site,https://good.example.com
No URL Site,
";

    let app = common::build_test_app(pool);
    let response = post_file(app, "/api/v1/platforms/upload", "sites.csv", csv.as_bytes()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["imported"], 1);
    assert_eq!(json["data"]["skipped"], 1);
    let reasons = json["data"]["skip_reasons"].as_array().unwrap();
    assert_eq!(reasons.len(), 1);
    assert!(reasons[0].as_str().unwrap().contains("missing URL"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_rejects_unsupported_extension(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_file(app, "/api/v1/platforms/upload", "sites.pdf", b"%PDF-1.4").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains(".pdf"));

    // Nothing was written.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/platforms").await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_rejects_file_without_usable_columns(pool: PgPool) {
    let csv = "Foo,Bar\n1,2\n";

    let app = common::build_test_app(pool);
    let response = post_file(app, "/api/v1/platforms/upload", "sites.csv", csv.as_bytes()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Foo"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_without_file_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let boundary = "X-LINKREACH-TEST-BOUNDARY";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{boundary}--\r\n"
    );
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/platforms/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(axum::body::Body::from(body))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_maps_status_and_dates(pool: PgPool) {
    let csv = "\
Site,URL,Status,Pitch Sent,Backlink Confirmed
Tech Blog,https://techblog.example.com,In Progress,2025-03-10,yes
";

    let app = common::build_test_app(pool.clone());
    let response = post_file(app, "/api/v1/platforms/upload", "sites.csv", csv.as_bytes()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/platforms").await;
    let platforms = body_json(response).await;
    assert_eq!(platforms[0]["status"], "In Progress");
    assert_eq!(platforms[0]["pitch_sent_date"], "2025-03-10");
    assert_eq!(platforms[0]["backlink_confirmed"], true);
}
