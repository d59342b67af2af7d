use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, trends::TrendsDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::trends::TrendsService,
        state::AppState,
    },
};

/// Tag for grouping trends endpoints in OpenAPI documentation
pub static TRENDS_TAG: &str = "trends";

/// Get trending Mastodon topics with AI sentiment.
///
/// # Returns
/// - `200 OK` - Trending topics, active instances and top posts
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/trends/mastodon",
    tag = TRENDS_TAG,
    responses(
        (status = 200, description = "Trending topics", body = TrendsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn mastodon_trends(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let report = TrendsService::new(&state.http_client, &state.config)
        .trending()
        .await;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
