//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, media store setup, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::media::{LocalMediaStore, MediaStore, NullMediaStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Media store (local directory, or uploads disabled)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Media directory cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let media_store: Arc<dyn MediaStore> = if let Some(dir) = &config.media_dir {
        let store = LocalMediaStore::create(
            dir.clone(),
            config.public_base_url.clone(),
            config.media_max_bytes,
        )
        .await
        .context("Failed to initialize media directory")?;
        tracing::info!(dir = %dir.display(), "Media store enabled (local)");
        Arc::new(store)
    } else {
        tracing::warn!("MEDIA_DIR not set, image uploads disabled");
        Arc::new(NullMediaStore::new())
    };

    let state = AppState::new(Arc::new(pool), media_store);

    let app = app_router(state, config.media_dir.as_deref());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
