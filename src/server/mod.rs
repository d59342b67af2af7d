//! Analytics API backend.
//!
//! Axum serves the REST endpoints, SeaORM persists accounts, sessions, tracked
//! keywords and search history in Postgres, and reqwest reaches the upstream services
//! (Groq, Mastodon, news feeds, Google, Razorpay, Resend).
//!
//! # Layout
//!
//! - `controller/` - axum handlers; authenticate, call one service, return a DTO
//! - `middleware/` - `AuthGuard` for bearer tokens and the OAuth CSRF session wrapper
//! - `service/` - business rules and upstream integrations
//! - `data/` - repositories over the `entity` crate
//! - `model/` - domain models and parameter structs
//! - `error/` - `AppError` and its HTTP mapping
//! - `scheduler/` - hourly purge of expired sessions and OTP codes
//!
//! `config`, `startup`, `state` and `router` wire these together at launch. A request to
//! an authenticated endpoint resolves its `Authorization: Bearer` header through
//! `AuthGuard` before the handler touches a service, and any `AppError` the service
//! returns becomes a JSON error body with the matching status code.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
