//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod campaign_repo;
pub mod dashboard_repo;
pub mod outreach_email_repo;
pub mod platform_repo;
pub mod target_repo;

pub use campaign_repo::CampaignRepo;
pub use dashboard_repo::DashboardRepo;
pub use outreach_email_repo::OutreachEmailRepo;
pub use platform_repo::PlatformRepo;
pub use target_repo::TargetRepo;
