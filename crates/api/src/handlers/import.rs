//! Handler for the spreadsheet/CSV platform import.
//!
//! Parsing is pure and lives in `linkreach_core::import`; this handler only
//! extracts the multipart upload, runs the parser, and inserts the accepted
//! rows in one transaction.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use linkreach_core::import;
use linkreach_db::repositories::PlatformRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Typed response for the upload endpoint.
#[derive(Debug, Serialize)]
pub struct ImportReport {
    pub imported: u64,
    pub skipped: usize,
    pub skip_reasons: Vec<String>,
}

/// POST /api/v1/platforms/upload
///
/// Accept a multipart upload with a single `file` field (.csv, .xlsx or
/// .xls), map its columns to platform fields by header aliases, and insert
/// every accepted row in one transaction. Per-row skips are reported, not
/// fatal; unreadable files and files with no usable columns reject the
/// whole upload.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<ImportReport>>)> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = upload
        .ok_or_else(|| AppError::BadRequest("No file field in multipart upload".to_string()))?;

    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let parsed = import::parse_upload(&data, &extension)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let imported = PlatformRepo::import_rows(&state.pool, &parsed.platforms).await?;

    tracing::info!(
        file = %filename,
        imported,
        skipped = parsed.skipped,
        "Platform import completed"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ImportReport {
                imported,
                skipped: parsed.skipped,
                skip_reasons: parsed.skip_reasons,
            },
        }),
    ))
}
