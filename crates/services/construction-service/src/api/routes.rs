//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use super::handlers::{apartment_routes, building_routes, floor_routes};
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/buildings", building_routes())
        .nest("/api/floors", floor_routes())
        .nest("/api/apartments", apartment_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    redis: Option<ServiceStatus>,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ServiceStatus {
    fn from_result<E: std::fmt::Debug>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self {
                status: "healthy",
                error: None,
            },
            Err(e) => Self {
                status: "unhealthy",
                error: Some(format!("{:?}", e)),
            },
        }
    }

    fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Health check endpoint with database and, when configured, Redis checks
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = ServiceStatus::from_result(state.database.ping().await);

    let redis = match &state.cache {
        Some(cache) => Some(ServiceStatus::from_result(cache.ping().await)),
        None => None,
    };

    let all_healthy = database.is_healthy() && redis.as_ref().map_or(true, ServiceStatus::is_healthy);

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceHealth { database, redis },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
