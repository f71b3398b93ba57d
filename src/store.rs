use crate::client::PlanSync;
use crate::errors::SyncError;
use crate::models::{DaySchedule, PlanStats, StudyPlan};
use crate::stats::build_stats;
use chrono::Local;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct PlanState {
    plan: StudyPlan,
    loaded: bool,
}

/// Owns the in-memory plan for one user. The plan lock is never held across
/// a call into `PlanSync`, so overlapping loads resolve in completion order.
pub struct StudyPlanStore<S> {
    user_id: String,
    sync: S,
    state: Mutex<PlanState>,
}

impl<S: PlanSync> StudyPlanStore<S> {
    pub fn new(user_id: impl Into<String>, sync: S) -> Self {
        Self {
            user_id: user_id.into(),
            sync,
            state: Mutex::new(PlanState::default()),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Replaces the whole plan with the remote one for the store's user. The
    /// user is fixed when the store is built, so unlike a per-call user id
    /// this takes no argument. Returns the number of days now held.
    pub async fn load(&self) -> Result<usize, SyncError> {
        let payload = self.sync.fetch_plan(&self.user_id).await?;
        let plan = payload.study_plan.unwrap_or_default();
        let days = plan.len();

        let mut state = self.state.lock().await;
        state.plan = plan;
        state.loaded = true;

        info!(user_id = %self.user_id, days, "study plan loaded");
        Ok(days)
    }

    pub async fn set_completion(&self, topic_id: &str, completed: bool) {
        let today = Local::now().date_naive().to_string();
        self.set_completion_on(topic_id, completed, &today).await;
    }

    /// Pushes the change recorded under `date`, then applies it locally
    /// whatever the push outcome was.
    pub async fn set_completion_on(&self, topic_id: &str, completed: bool, date: &str) {
        match self
            .sync
            .push_completion(&self.user_id, topic_id, date, completed)
            .await
        {
            Ok(ack) => debug!(topic_id, success = ack.success, "{}", ack.message),
            Err(err) => warn!("failed to record progress for {topic_id}: {err}"),
        }

        let mut state = self.state.lock().await;
        let topic = state
            .plan
            .iter_mut()
            .flat_map(|day| day.subjects.iter_mut())
            .find(|topic| topic.id == topic_id);

        match topic {
            Some(topic) => topic.completed = completed,
            None => debug!(topic_id, "topic not in current plan"),
        }
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.lock().await.loaded
    }

    pub async fn snapshot(&self) -> StudyPlan {
        self.state.lock().await.plan.clone()
    }

    pub async fn day(&self, date: &str) -> Option<DaySchedule> {
        let state = self.state.lock().await;
        state.plan.iter().find(|day| day.date == date).cloned()
    }

    pub async fn stats(&self) -> PlanStats {
        let state = self.state.lock().await;
        build_stats(&state.plan)
    }
}
