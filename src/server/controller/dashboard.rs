use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardSummaryDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the dashboard summary.
///
/// Combines the user's plan usage, tracked keywords and live news coverage for those
/// keywords. Each view counts toward usage but is never refused.
///
/// # Returns
/// - `200 OK` - Dashboard data
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard data", body = DashboardSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let summary = DashboardService::new(&state.db, &state.feed_client)
        .summary(user.id)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}
