use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use sea_orm::ConnectionTrait;

use crate::{
    model::health::{DatabaseHealthDto, HealthDto},
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

const SERVICE_NAME: &str = "Vibe Analytics Backend";

/// Report service and database health.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Database ping failed
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service healthy", body = HealthDto),
        (status = 503, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database) = match state.db.execute_unprepared("SELECT 1").await {
        Ok(_) => (
            StatusCode::OK,
            DatabaseHealthDto {
                status: "connected".to_string(),
                error: None,
            },
        ),
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                DatabaseHealthDto {
                    status: "disconnected".to_string(),
                    error: Some(e.to_string()),
                },
            )
        }
    };

    let overall = if status == StatusCode::OK {
        "OK"
    } else {
        "DEGRADED"
    };

    (
        status,
        Json(HealthDto {
            status: overall.to_string(),
            service: SERVICE_NAME.to_string(),
            database,
            timestamp: Utc::now(),
        }),
    )
}
