//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO used by both create and edit
//!
//! Edits are full-record overwrites (no patch semantics), so create and
//! edit share one input DTO per entity.

pub mod campaign;
pub mod dashboard;
pub mod outreach_email;
pub mod platform;
pub mod target;
