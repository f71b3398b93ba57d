pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod store;
pub mod state;

pub use app::router;
pub use client::{PlanSync, SyncClient};
pub use config::Config;
pub use state::AppState;
pub use store::StudyPlanStore;
