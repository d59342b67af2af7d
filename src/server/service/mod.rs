//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod analysis;
pub mod auth;
pub mod dashboard;
pub mod email;
pub mod groq;
pub mod keyword;
pub mod mastodon;
pub mod news;
pub mod payment;
pub mod report;
pub mod session;
pub mod trends;
pub mod usage;
