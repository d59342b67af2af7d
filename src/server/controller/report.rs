use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, report::SearchHistoryDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Get the caller's 50 most recent searches with summary statistics.
#[utoipa::path(
    get,
    path = "/api/reports/history",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Search history", body = SearchHistoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let history = ReportService::new(&state.db).history(user.id).await?;

    Ok((StatusCode::OK, Json(history)))
}

/// Download the full search history as CSV.
///
/// # Access Control
/// - `Pro` - Exports are a Pro plan feature
#[utoipa::path(
    get,
    path = "/api/reports/export/csv",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Pro plan required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn export_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Pro])
        .await?;

    let csv = ReportService::new(&state.db).export_csv(user.id).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=search-history.csv",
            ),
        ],
        csv,
    ))
}

/// Download the full search history as a PDF document.
///
/// # Access Control
/// - `Pro` - Exports are a Pro plan feature
#[utoipa::path(
    get,
    path = "/api/reports/export/pdf",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "PDF attachment", content_type = "application/pdf", body = Vec<u8>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Pro plan required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn export_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Pro])
        .await?;

    let pdf = ReportService::new(&state.db).export_pdf(user.id).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=search-history.pdf",
            ),
        ],
        pdf,
    ))
}
