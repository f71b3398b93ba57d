use crate::errors::AppError;
use crate::models::{CompletionRequest, DayResponse, PlanResponse, PlanStats, TopicClass};
use crate::state::AppState;
use crate::stats::day_summary;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn get_plan(State(state): State<AppState>) -> Json<PlanResponse> {
    Json(plan_response(&state).await)
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let day = state
        .store
        .day(&date)
        .await
        .ok_or_else(|| AppError::not_found(format!("no schedule for {date}")))?;
    let stats = day_summary(&day, Local::now().date_naive());
    let classes = day.subjects.iter().map(TopicClass::of).collect();

    Ok(Json(DayResponse {
        day,
        stats,
        classes,
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<PlanStats> {
    Json(state.store.stats().await)
}

pub async fn reload(State(state): State<AppState>) -> Result<Json<PlanResponse>, AppError> {
    state.store.load().await?;
    Ok(Json(plan_response(&state).await))
}

pub async fn set_progress(
    State(state): State<AppState>,
    Json(payload): Json<CompletionRequest>,
) -> Result<Json<PlanStats>, AppError> {
    if payload.topic_id.trim().is_empty() {
        return Err(AppError::bad_request("topicId must not be empty"));
    }

    let topic_id = payload.topic_id.as_str();
    info!(topic_id, completed = payload.completed, "completion toggled");
    state.store.set_completion(topic_id, payload.completed).await;
    Ok(Json(state.store.stats().await))
}

async fn plan_response(state: &AppState) -> PlanResponse {
    PlanResponse {
        user_id: state.store.user_id().to_string(),
        study_plan: state.store.snapshot().await,
    }
}
