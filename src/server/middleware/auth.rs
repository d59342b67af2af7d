use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{Plan, User},
    service::session::SessionService,
};

pub enum Permission {
    /// Caller must be on the Pro plan.
    Pro,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Bearer token carried by the request.
    ///
    /// # Returns
    /// - `Ok(&str)` - Token from a `Bearer <token>` header
    /// - `Err(AuthError::MissingAuthorization)` - No `Authorization` header
    /// - `Err(AuthError::MalformedAuthorization)` - Header is not a bearer credential
    pub fn token(&self) -> Result<&'a str, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingAuthorization);
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::MalformedAuthorization)?;

        match value.split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
                let token = token.trim();
                if token.is_empty() {
                    Err(AuthError::MalformedAuthorization)
                } else {
                    Ok(token)
                }
            }
            _ => Err(AuthError::MalformedAuthorization),
        }
    }

    /// Resolves the caller and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying all permissions
    /// - `Err(AuthError::InvalidSession)` - Token does not match a live session
    /// - `Err(AuthError::ProRequired)` - `Permission::Pro` required but user is on the free plan
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.token()?;

        let Some(user) = SessionService::new(self.db).authenticate(token).await? else {
            return Err(AuthError::InvalidSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Pro => {
                    if user.plan != Plan::Pro {
                        return Err(AuthError::ProRequired(user.id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
