use std::time::Duration;

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Browser User-Agent sent with feed requests; several publishers reject unknown clients.
const FEED_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const FEED_TIMEOUT: Duration = Duration::from_secs(5);
const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the cookie session layer used by the Google OAuth flow.
///
/// Sessions live in the same Postgres database; the store creates its own table on
/// first start. Cookies are `SameSite=Lax` so they survive the redirect back from Google.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let pool = db.get_postgres_connection_pool();
    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(10)));

    Ok(session_layer)
}

/// HTTP client for JSON APIs. Redirects are never followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(API_TIMEOUT)
        .build()?;

    Ok(client)
}

/// HTTP client for RSS feeds, which commonly sit behind redirects.
pub fn setup_feed_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .user_agent(FEED_USER_AGENT)
        .timeout(FEED_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the Google OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect endpoints set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs is not a valid URL
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str, value: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    };

    let auth_url = AuthUrl::new(config.google_auth_url.clone())
        .map_err(|_| invalid("GOOGLE_AUTH_URL", &config.google_auth_url))?;
    let token_url = TokenUrl::new(config.google_token_url.clone())
        .map_err(|_| invalid("GOOGLE_TOKEN_URL", &config.google_token_url))?;
    let redirect_url = RedirectUrl::new(config.google_callback_url.clone())
        .map_err(|_| invalid("GOOGLE_CALLBACK_URL", &config.google_callback_url))?;

    let client = oauth2::basic::BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}
