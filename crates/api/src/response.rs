//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope for non-entity payloads
/// (reports, summaries).
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
