//! Route definitions for the `/emails` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::outreach_email;
use crate::state::AppState;

/// Routes mounted at `/emails`.
///
/// ```text
/// GET    /            -> list (?status= filter)
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update (drafts only)
/// DELETE /{id}        -> delete
/// POST   /{id}/send   -> send via the mail provider
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(outreach_email::list).post(outreach_email::create))
        .route(
            "/{id}",
            get(outreach_email::get_by_id)
                .put(outreach_email::update)
                .delete(outreach_email::delete),
        )
        .route("/{id}/send", post(outreach_email::send))
}
