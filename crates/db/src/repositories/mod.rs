//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod notification_repo;
pub mod organization_repo;
pub mod project_repo;
pub mod script_repo;
pub mod script_version_repo;
pub mod shooting_day_repo;
pub mod user_repo;

pub use asset_repo::AssetRepo;
pub use notification_repo::NotificationRepo;
pub use organization_repo::OrganizationRepo;
pub use project_repo::ProjectRepo;
pub use script_repo::ScriptRepo;
pub use script_version_repo::ScriptVersionRepo;
pub use shooting_day_repo::ShootingDayRepo;
pub use user_repo::UserRepo;
