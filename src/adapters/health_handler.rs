use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::QuestionnairePort;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub pool: String,
    pub questionnaires: usize,
}

pub struct HealthHandler {
    questionnaires: Arc<dyn QuestionnairePort>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(questionnaires: Arc<dyn QuestionnairePort>) -> Self {
        Self {
            questionnaires,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let count = self.questionnaires.count().await;
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            checks: HealthChecks {
                pool: if count > 0 { "ok" } else { "empty" }.to_string(),
                questionnaires: count,
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - ready once the pool holds at least one questionnaire
    pub async fn ready(&self) -> impl IntoResponse {
        if self.questionnaires.count().await > 0 {
            (StatusCode::OK, Json(serde_json::json!({
                "status": "ready",
                "message": "Server is ready to accept requests"
            })))
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
                "status": "not_ready",
                "message": "Questionnaire pool is empty"
            })))
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}
