//! Liveness endpoint for load balancers and uptime checks.
//!
//! A failed store check still answers 200, with status `degraded`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    /// `agency-api` package version.
    pub version: &'static str,
    /// Whether the contact store answered `SELECT 1`.
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_store_check(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                ServiceStatus::Ok
            } else {
                ServiceStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn report_health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match agency_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Contact store failed health check");
            false
        }
    };

    Json(HealthReport::from_store_check(db_healthy))
}

/// `/health`, mounted outside the application route tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report_health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_store_check_is_degraded() {
        let report = HealthReport::from_store_check(false);
        assert_eq!(report.status, ServiceStatus::Degraded);
        assert_eq!(
            serde_json::to_value(&report).unwrap()["status"],
            "degraded"
        );
    }

    #[test]
    fn passing_store_check_is_ok() {
        let report = HealthReport::from_store_check(true);
        assert_eq!(serde_json::to_value(&report).unwrap()["status"], "ok");
    }
}
