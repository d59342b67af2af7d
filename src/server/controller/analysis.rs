use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        analysis::{AnalysisDto, AnalyzeQuery},
        api::{ErrorDto, LimitErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{analysis::AnalysisService, usage::UsageService},
        state::AppState,
    },
};

/// Tag for grouping analysis endpoints in OpenAPI documentation
pub static ANALYSIS_TAG: &str = "analysis";

/// Analyse public discussion around a keyword.
///
/// Consumes one query from the caller's plan and records the search in their history.
///
/// # Returns
/// - `200 OK` - Analysis with updated usage
/// - `400 Bad Request` - Keyword missing
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Plan query limit reached
/// - `404 Not Found` - User no longer exists
#[utoipa::path(
    get,
    path = "/api/analyze",
    tag = ANALYSIS_TAG,
    params(AnalyzeQuery),
    responses(
        (status = 200, description = "Topic analysis", body = AnalysisDto),
        (status = 400, description = "Keyword is required", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Search limit reached", body = LimitErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AnalyzeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let analysis = AnalysisService::new(&state.db, &state.http_client, &state.config)
        .analyze(user.id, query.keyword.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(analysis)))
}

/// Reset the caller's query counter to zero.
#[utoipa::path(
    post,
    path = "/api/analyze/reset-usage",
    tag = ANALYSIS_TAG,
    responses(
        (status = 200, description = "Usage reset", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn reset_usage(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    UsageService::new(&state.db).reset(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Usage counter reset successfully".to_string(),
        }),
    ))
}
