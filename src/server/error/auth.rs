use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{
    basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Missing authorization header")]
    MissingAuthorization,

    /// `Authorization` header is not of the form `Bearer <token>`.
    #[error("Malformed authorization header")]
    MalformedAuthorization,

    /// Bearer token does not match a live session.
    #[error("Session token is invalid or expired")]
    InvalidSession,

    /// Session points at a user row that no longer exists.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// Route requires a Pro subscription.
    #[error("User {0} attempted to use a Pro feature on the free plan")]
    ProRequired(i32),

    /// Signup attempted with an email that already has a verified account.
    #[error("Account already exists for {0}")]
    AlreadyRegistered(String),

    /// Login attempted for an email with no account.
    #[error("No account for {0}")]
    AccountNotFound(String),

    /// Login attempted before the signup OTP was confirmed.
    #[error("Account {0} is not verified")]
    AccountNotVerified(String),

    /// OTP did not match any unexpired code for the email.
    #[error("Invalid or expired OTP for {0}")]
    InvalidOtp(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Google rejected the authorization code exchange.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(
        #[from]
        RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ),

    /// Google returned a profile without an email address.
    #[error("Google profile did not include an email address")]
    MissingEmail,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For duplicate signups, unverified accounts, bad OTPs and CSRF failures
/// - 401 Unauthorized - For missing, malformed or unknown bearer tokens
/// - 403 Forbidden - For Pro-only features on the free plan
/// - 404 Not Found - For logins against unknown emails
/// - 500 Internal Server Error - For OAuth exchange failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingAuthorization | Self::MalformedAuthorization => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InvalidSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired session")
            }
            Self::ProRequired(_) => (StatusCode::FORBIDDEN, "Pro plan required"),
            Self::AlreadyRegistered(_) => (
                StatusCode::BAD_REQUEST,
                "User already exists. Please login instead.",
            ),
            Self::AccountNotFound(_) => (
                StatusCode::NOT_FOUND,
                "No account found with this email. Please sign up first.",
            ),
            Self::AccountNotVerified(_) => (
                StatusCode::BAD_REQUEST,
                "Account not verified. Please complete signup first.",
            ),
            Self::InvalidOtp(_) => (StatusCode::BAD_REQUEST, "Invalid or expired OTP"),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(_) | Self::MissingEmail => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_failures_are_unauthorized() {
        for err in [
            AuthError::MissingAuthorization,
            AuthError::MalformedAuthorization,
            AuthError::InvalidSession,
            AuthError::UserNotInDatabase(1),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn pro_required_is_forbidden() {
        let response = AuthError::ProRequired(7).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn unknown_account_is_not_found() {
        let response = AuthError::AccountNotFound("a@b.c".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
