use std::time::{Duration, Instant};

use day_planner_db::{ActivityRepository, Ping};
use serde::Serialize;
use tokio::time::timeout;

/// Longest a store probe may take before it counts as unhealthy
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    pub error: Option<String>,
    pub duration_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub checks: Vec<HealthCheck>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Probes the activity store once and reports the result.
pub async fn readiness(repository: &dyn ActivityRepository) -> HealthReport {
    let started = Instant::now();
    let error = match timeout(PROBE_TIMEOUT, repository.ping()).await {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(err.to_string()),
        Err(_) => Some(format!("no answer within {}s", PROBE_TIMEOUT.as_secs())),
    };

    let status = if error.is_none() {
        HealthStatus::Healthy
    } else {
        tracing::warn!(store = repository.store_name(), error = ?error, "Store readiness probe failed");
        HealthStatus::Unhealthy
    };

    HealthReport {
        status,
        checks: vec![HealthCheck {
            name: repository.store_name().to_string(),
            status,
            error,
            duration_ms: started.elapsed().as_millis(),
        }],
    }
}
