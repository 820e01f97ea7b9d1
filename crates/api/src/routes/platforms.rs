//! Route definitions for the `/platforms` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{import, platform};
use crate::state::AppState;

/// Routes mounted at `/platforms`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// POST   /upload       -> import::upload (multipart)
/// POST   /delete-all   -> delete_all
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(platform::list).post(platform::create))
        .route("/upload", post(import::upload))
        .route("/delete-all", post(platform::delete_all))
        .route(
            "/{id}",
            get(platform::get_by_id)
                .put(platform::update)
                .delete(platform::delete),
        )
}
