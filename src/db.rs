//! Database connection and schema setup

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{config::DatabaseConfig, error::StartupError};

/// Open a connection pool for the configured database, creating the file if
/// needed.
///
/// An in-memory database lives and dies with its connection, so for those
/// the pool is held to one connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, StartupError> {
    let connect_opts = SqliteConnectOptions::from_str(&config.url)
        .map_err(StartupError::Connect)?
        .create_if_missing(true);

    let pool_opts = if is_in_memory(&config.url) {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
    };

    pool_opts
        .connect_with(connect_opts)
        .await
        .map_err(StartupError::Connect)
}

/// Apply the schema migrations. Safe to run against an already set up
/// database.
pub async fn setup_database(pool: &SqlitePool) -> Result<(), StartupError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
