use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, LimitErrorDto, SuccessDto},
        keyword::{CreateKeywordDto, KeywordDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::keyword::KeywordService,
        state::AppState,
    },
};

/// Tag for grouping keyword endpoints in OpenAPI documentation
pub static KEYWORD_TAG: &str = "keyword";

/// List tracked keywords, newest first.
#[utoipa::path(
    get,
    path = "/api/keywords",
    tag = KEYWORD_TAG,
    responses(
        (status = 200, description = "Tracked keywords", body = Vec<KeywordDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_keywords(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let keywords: Vec<KeywordDto> = KeywordService::new(&state.db)
        .list(user.id)
        .await?
        .into_iter()
        .map(|k| k.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(keywords)))
}

/// Track a new keyword.
///
/// Free accounts may track up to three keywords.
///
/// # Returns
/// - `200 OK` - Keyword tracked
/// - `400 Bad Request` - Keyword missing or blank
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Free plan keyword limit reached
#[utoipa::path(
    post,
    path = "/api/keywords",
    tag = KEYWORD_TAG,
    request_body = CreateKeywordDto,
    responses(
        (status = 200, description = "Keyword tracked", body = KeywordDto),
        (status = 400, description = "Keyword is required", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Keyword limit reached", body = LimitErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_keyword(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateKeywordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let keyword = KeywordService::new(&state.db)
        .add(&user, payload.keyword.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(keyword.into_dto())))
}

/// Stop tracking a keyword.
///
/// Only the caller's own keywords are affected; unknown ids succeed silently.
#[utoipa::path(
    delete,
    path = "/api/keywords/{id}",
    tag = KEYWORD_TAG,
    params(
        ("id" = i32, Path, description = "Keyword ID")
    ),
    responses(
        (status = 200, description = "Keyword removed", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_keyword(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    KeywordService::new(&state.db).remove(user.id, id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
