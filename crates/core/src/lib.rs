//! Domain logic for the linkreach outreach tracker.
//!
//! This crate contains no database dependencies; everything here is pure
//! computation and validation over data passed in by the caller.

pub mod error;
pub mod import;
pub mod status;
pub mod types;
pub mod validate;
