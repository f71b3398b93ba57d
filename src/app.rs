use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/plan", get(handlers::get_plan))
        .route("/api/plan/reload", post(handlers::reload))
        .route("/api/plan/:date", get(handlers::get_day))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/progress", post(handlers::set_progress))
        .with_state(state)
}
