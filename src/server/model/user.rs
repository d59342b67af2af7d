//! User domain models and parameters.
//!
//! Provides the account model together with the subscription plan and its limits.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::user::UserDto;

/// Subscription tier of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Free,
    Pro,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }

    /// Analysis queries allowed per billing period.
    pub fn query_limit(&self) -> i32 {
        match self {
            Self::Free => 50,
            Self::Pro => 1000,
        }
    }

    /// Tracked keywords allowed; `None` means unlimited.
    pub fn keyword_limit(&self) -> Option<u64> {
        match self {
            Self::Free => Some(3),
            Self::Pro => None,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            other => Err(other.to_string()),
        }
    }
}

/// How the account was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    Local,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Google => "google",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Self::Local),
            "google" => Ok(Self::Google),
            other => Err(other.to_string()),
        }
    }
}

/// Registered account with plan and usage counters.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub auth_provider: AuthProvider,
    pub plan: Plan,
    /// Analysis queries consumed in the current period.
    pub queries_used: i32,
    /// Set once the user confirms an OTP or signs in through Google.
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Queries left before the plan limit, never negative.
    pub fn remaining_queries(&self) -> i32 {
        (self.plan.query_limit() - self.queries_used).max(0)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            auth_provider: self.auth_provider.as_str().to_string(),
            plan: self.plan.as_str().to_string(),
            is_verified: self.is_verified,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored plan or auth provider is not a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let plan = entity
            .plan
            .parse::<Plan>()
            .map_err(|value| DbErr::Custom(format!("Unknown plan '{}'", value)))?;
        let auth_provider = entity
            .auth_provider
            .parse::<AuthProvider>()
            .map_err(|value| DbErr::Custom(format!("Unknown auth provider '{}'", value)))?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            auth_provider,
            plan,
            queries_used: entity.queries_used,
            is_verified: entity.is_verified,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }
}

/// Parameters for creating a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: Option<String>,
    pub auth_provider: AuthProvider,
    /// Google accounts arrive already verified; OTP signups do not.
    pub is_verified: bool,
}
