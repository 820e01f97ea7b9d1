pub mod campaigns;
pub mod dashboard;
pub mod emails;
pub mod health;
pub mod platforms;
pub mod targets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard                    summary counts and recent activity (GET)
///
/// /platforms                    list, create
/// /platforms/{id}               get, update, delete
/// /platforms/upload             spreadsheet/CSV import (POST, multipart)
/// /platforms/delete-all         bulk delete (POST)
///
/// /targets                      list (?status=), create
/// /targets/{id}                 get, update, delete
///
/// /campaigns                    list, create
/// /campaigns/{id}               get, update, delete
///
/// /emails                       list (?status=), create
/// /emails/{id}                  get, update, delete
/// /emails/{id}/send             hand off to the mail provider (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(dashboard::router())
        .nest("/platforms", platforms::router())
        .nest("/targets", targets::router())
        .nest("/campaigns", campaigns::router())
        .nest("/emails", emails::router())
}
