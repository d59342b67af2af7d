use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{LoginOtpDto, MeDto, OtpIssuedDto, SignupOtpDto, VerifiedDto, VerifyOtpDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::CsrfSession},
        service::{
            auth::{google::GoogleAuthService, normalize_email, otp::IssuedOtp, otp::OtpAuthService},
            email::EmailService,
            session::SessionService,
        },
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters Google appends to the OAuth callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Authorization code to exchange for an access token.
    pub code: Option<String>,
    /// Set instead of `code` when the user denied consent.
    pub error: Option<String>,
}

fn required_email(email: Option<String>) -> Result<String, AppError> {
    email
        .as_deref()
        .map(normalize_email)
        .filter(|email| !email.is_empty())
        .ok_or_else(|| AppError::BadRequest("Email is required".to_string()))
}

fn otp_issued(issued: IssuedOtp, echo_code: bool) -> OtpIssuedDto {
    let message = if issued.delivery.delivered {
        "OTP sent to email"
    } else {
        "OTP generated (email delivery may have failed)"
    };

    OtpIssuedDto {
        success: true,
        message: message.to_string(),
        otp: echo_code.then_some(issued.code),
    }
}

/// Start email signup.
///
/// Creates an unverified account when none exists and emails a six digit code valid for
/// ten minutes.
///
/// # Returns
/// - `200 OK` - Code issued
/// - `400 Bad Request` - Email missing or already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/signup-otp",
    tag = AUTH_TAG,
    request_body = SignupOtpDto,
    responses(
        (status = 200, description = "Code issued", body = OtpIssuedDto),
        (status = 400, description = "Email missing or already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup_otp(
    State(state): State<AppState>,
    Json(payload): Json<SignupOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = required_email(payload.email)?;

    let service = OtpAuthService::new(
        &state.db,
        EmailService::new(&state.http_client, &state.config),
    );
    let issued = service.request_signup(&email, payload.name).await?;

    Ok((
        StatusCode::OK,
        Json(otp_issued(issued, state.config.otp_in_response)),
    ))
}

/// Request a login code for a verified account.
///
/// # Returns
/// - `200 OK` - Code issued
/// - `400 Bad Request` - Email missing or account not verified
/// - `404 Not Found` - No account for the email
#[utoipa::path(
    post,
    path = "/api/auth/login-otp",
    tag = AUTH_TAG,
    request_body = LoginOtpDto,
    responses(
        (status = 200, description = "Code issued", body = OtpIssuedDto),
        (status = 400, description = "Email missing or account not verified", body = ErrorDto),
        (status = 404, description = "No account for this email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_otp(
    State(state): State<AppState>,
    Json(payload): Json<LoginOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = required_email(payload.email)?;

    let service = OtpAuthService::new(
        &state.db,
        EmailService::new(&state.http_client, &state.config),
    );
    let issued = service.request_login(&email).await?;

    Ok((
        StatusCode::OK,
        Json(otp_issued(issued, state.config.otp_in_response)),
    ))
}

/// Confirm a code and receive a bearer token.
///
/// # Returns
/// - `200 OK` - Account verified, session created
/// - `400 Bad Request` - Missing fields or invalid/expired code
/// - `404 Not Found` - Account no longer exists
#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    tag = AUTH_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Account verified", body = VerifiedDto),
        (status = 400, description = "Missing fields or invalid code", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload
        .email
        .as_deref()
        .map(normalize_email)
        .filter(|email| !email.is_empty());
    let otp = payload.otp.filter(|otp| !otp.trim().is_empty());

    let (Some(email), Some(otp)) = (email, otp) else {
        return Err(AppError::BadRequest(
            "Email and OTP are required".to_string(),
        ));
    };

    let service = OtpAuthService::new(
        &state.db,
        EmailService::new(&state.http_client, &state.config),
    );
    let (user, session) = service.verify(&email, &otp).await?;

    Ok((
        StatusCode::OK,
        Json(VerifiedDto {
            success: true,
            message: "Email verified".to_string(),
            user: user.into_dto(),
            token: session.token,
        }),
    ))
}

/// Get the authenticated user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing, malformed or expired bearer token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = MeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(MeDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// Revoke the caller's bearer token.
///
/// # Returns
/// - `200 OK` - Token revoked (or already gone)
/// - `401 Unauthorized` - No bearer token supplied
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &headers);
    let token = guard.token()?;

    SessionService::new(&state.db).revoke(token).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Redirect to Google's consent screen.
///
/// Stores a random CSRF state in the cookie session for the callback to check.
#[utoipa::path(
    get,
    path = "/api/auth/google",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        GoogleAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete Google sign-in.
///
/// Always redirects to the frontend: `/auth/callback?token=...` on success, otherwise
/// `/login?error=google_auth_failed|no_email|session_creation_failed`.
#[utoipa::path(
    get,
    path = "/api/auth/google/callback",
    tag = AUTH_TAG,
    params(
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("state" = Option<String>, Query, description = "CSRF state")
    ),
    responses(
        (status = 307, description = "Redirect to the frontend")
    ),
)]
pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> impl IntoResponse {
    let frontend_url = &state.config.frontend_url;

    match complete_google_login(&state, &session, params).await {
        Ok(token) => Redirect::temporary(&format!(
            "{}/auth/callback?token={}",
            frontend_url,
            urlencoding::encode(&token)
        )),
        Err(reason) => Redirect::temporary(&format!("{}/login?error={}", frontend_url, reason)),
    }
}

/// Runs the callback and returns the new bearer token or the reason code for the frontend.
async fn complete_google_login(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<String, &'static str> {
    if let Some(error) = params.error {
        tracing::info!("Google sign-in cancelled: {}", error);
        return Err("google_auth_failed");
    }

    if let Err(e) = validate_csrf(session, params.state.as_deref()).await {
        tracing::warn!("Google callback rejected: {}", e);
        return Err("google_auth_failed");
    }

    let Some(code) = params.code else {
        return Err("google_auth_failed");
    };

    let auth_service =
        GoogleAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let user = match auth_service.callback(code).await {
        Ok(user) => user,
        Err(AppError::AuthErr(AuthError::MissingEmail)) => return Err("no_email"),
        Err(e) => {
            tracing::error!("Google sign-in failed: {}", e);
            return Err("google_auth_failed");
        }
    };

    match SessionService::new(&state.db).create(user.id).await {
        Ok(session) => Ok(session.token),
        Err(e) => {
            tracing::error!("Failed to create session for user {}: {}", user.id, e);
            Err("session_creation_failed")
        }
    }
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match (stored_state, csrf_state) {
        (Some(stored), Some(received)) if stored == received => Ok(()),
        _ => Err(AppError::AuthErr(AuthError::CsrfValidationFailed)),
    }
}
