use std::sync::Arc;

use linkreach_mail::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Built once at startup and passed explicitly into the router; nothing in
/// this service is reached through ambient globals. Cheaply cloneable
/// (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: linkreach_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Mail provider used by the email send endpoint.
    pub mailer: Arc<dyn Mailer>,
}
