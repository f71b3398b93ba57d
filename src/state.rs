use crate::client::SyncClient;
use crate::store::StudyPlanStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StudyPlanStore<SyncClient>>,
}

impl AppState {
    pub fn new(store: StudyPlanStore<SyncClient>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
