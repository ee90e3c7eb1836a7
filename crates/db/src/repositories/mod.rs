//! Repository layer: one zero-sized struct per table with static async
//! methods that take a `&PgPool`.

pub mod item_repo;
pub mod notification_repo;
pub mod project_repo;
pub mod scenario_repo;

pub use item_repo::ItemRepo;
pub use notification_repo::NotificationRepo;
pub use project_repo::ProjectRepo;
pub use scenario_repo::ScenarioRepo;
