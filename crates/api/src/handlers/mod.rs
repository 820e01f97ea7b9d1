//! HTTP handlers, one module per resource.

pub mod campaign;
pub mod dashboard;
pub mod import;
pub mod outreach_email;
pub mod platform;
pub mod target;
