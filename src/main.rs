mod model;
mod server;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, scheduler::session_cleanup, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let feed_client = startup::setup_feed_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    // Purge expired sessions and OTP codes hourly
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = session_cleanup::start_scheduler(scheduler_db).await {
            tracing::error!("Session cleanup scheduler error: {}", e);
        }
    });

    let frontend_origin = config.frontend_url.parse::<HeaderValue>().map_err(|_| {
        AppError::InternalError(format!("Invalid FRONTEND_URL: {}", config.frontend_url))
    })?;
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let address = format!("0.0.0.0:{}", config.port);

    let router = server::router::router()
        .with_state(AppState::new(
            db,
            http_client,
            feed_client,
            oauth_client,
            config,
        ))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Starting server on {}", address);

    axum::serve(listener, router).await?;

    Ok(())
}
