use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::LimitErrorDto, server::model::user::Plan};

/// A plan limit stopped the request.
#[derive(Error, Debug)]
pub enum QuotaError {
    /// The user already tracks as many keywords as their plan allows.
    #[error("Keyword limit of {limit} reached")]
    KeywordLimit { limit: u64 },

    /// The user has no analysis queries left for this billing period.
    #[error("Query limit of {limit} reached on {plan} plan")]
    QueryLimit { plan: Plan, used: i32, limit: i32 },
}

/// Both variants answer 403 with a machine-readable `code` so the frontend can
/// route the user to the upgrade page.
impl IntoResponse for QuotaError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let body = match self {
            Self::KeywordLimit { limit } => LimitErrorDto {
                error: "Keyword limit reached".to_string(),
                message: "Upgrade to Pro to track more keywords".to_string(),
                code: "UPGRADE_REQUIRED".to_string(),
                queries_used: None,
                limit: Some(limit as i32),
                plan: None,
            },
            Self::QueryLimit { plan, used, limit } => LimitErrorDto {
                error: "Search limit reached".to_string(),
                message: format!(
                    "You have reached your {} plan limit of {} searches. Upgrade to Pro for unlimited searches.",
                    plan.as_str(),
                    limit
                ),
                code: "LIMIT_REACHED".to_string(),
                queries_used: Some(used),
                limit: Some(limit),
                plan: Some(plan.as_str().to_string()),
            },
        };

        (StatusCode::FORBIDDEN, Json(body)).into_response()
    }
}
