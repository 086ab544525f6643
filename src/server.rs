//! HTTP server initialization and runtime setup.

use crate::api::middleware::basic_auth::BasicAuth;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteAliasRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite alias store (schema ensured at startup)
/// - Basic-auth credential table
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The storage file cannot be opened or the schema cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = SqliteAliasRepository::connect(&config.storage_path).await?;
    tracing::info!("Connected to storage at {}", config.storage_path);

    let state = AppState {
        aliases: Arc::new(repository),
    };

    let auth = BasicAuth::new(&config.http_realm, config.users());

    let app = app_router(state, auth);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
