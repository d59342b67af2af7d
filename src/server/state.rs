//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::Config;

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database handle is a pool, reqwest clients
/// share an inner `Arc`, and the configuration sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for API calls (Google, Groq, Razorpay, Resend, Mastodon).
    ///
    /// Configured without redirect following to prevent SSRF vulnerabilities.
    pub http_client: reqwest::Client,

    /// HTTP client for RSS feeds.
    ///
    /// Follows redirects, sends a browser User-Agent and gives up after five seconds.
    pub feed_client: reqwest::Client,

    /// OAuth2 client for the Google login flow.
    pub oauth_client: OAuth2Client,

    /// Runtime configuration loaded at startup.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        feed_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: Config,
    ) -> Self {
        Self {
            db,
            http_client,
            feed_client,
            oauth_client,
            config: Arc::new(config),
        }
    }
}
