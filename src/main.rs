//! Aklatan Server
//!
//! Serves the book catalog over HTTP.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aklatan::{
    config::{AppConfig, LoggingConfig},
    create_router, db,
    repository::Repository,
    services::Services,
    AppState, StartupError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(StartupError::from)?;

    init_tracing(&config.logging);

    tracing::info!("Starting Aklatan v{}", env!("CARGO_PKG_VERSION"));

    let pool = db::connect(&config.database).await?;
    tracing::info!("Connected to database");

    db::setup_database(&pool).await?;
    tracing::info!("Database migrations completed");

    let addr = SocketAddr::new(
        config.server.host.parse::<IpAddr>().map_err(StartupError::from)?,
        config.server.port,
    );

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(Repository::new(pool))),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(StartupError::from)?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(StartupError::from)?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("aklatan={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
