use std::sync::Arc;

use day_planner_db::ActivityRepository;

use crate::config::AppConfig;
use crate::controller::ActivitiesController;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ActivitiesController>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ActivityRepository>, config: Arc<AppConfig>) -> Self {
        Self {
            controller: Arc::new(ActivitiesController::new(repository)),
            config,
        }
    }
}
