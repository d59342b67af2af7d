//! Wire types shared by every API endpoint.
//!
//! DTOs here are what the frontend sees. The server converts its domain models into these
//! at the controller boundary; nothing in this module touches the database.

pub mod analysis;
pub mod api;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod keyword;
pub mod payment;
pub mod report;
pub mod sentiment;
pub mod trends;
pub mod user;
