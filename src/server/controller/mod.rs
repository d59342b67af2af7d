//! HTTP handlers.
//!
//! Controllers extract request data, authenticate through `AuthGuard`, call one service
//! and shape the response. Each handler carries a `utoipa::path` annotation so it shows
//! up in the generated OpenAPI document.

pub mod analysis;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod keyword;
pub mod payment;
pub mod report;
pub mod trends;
