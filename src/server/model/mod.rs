//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod analysis;
pub mod keyword;
pub mod news;
pub mod payment;
pub mod search_history;
pub mod session;
pub mod trends;
pub mod user;
