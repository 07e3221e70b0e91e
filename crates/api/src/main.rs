use std::net::SocketAddr;
use std::sync::Arc;

use airwatch_core::store::SettingsStore;
use airwatch_db::{InMemorySettingsStore, PgSettingsStore};
use airwatch_dispatch::{AlertProcessor, Dispatcher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airwatch_api::config::ServerConfig;
use airwatch_api::router::build_app_router;
use airwatch_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "airwatch_api=debug,airwatch_dispatch=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Settings store ---
    let store: Arc<dyn SettingsStore> = match &config.database_url {
        Some(database_url) => {
            let pool = airwatch_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            airwatch_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            airwatch_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgSettingsStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, alert settings are kept in memory only");
            Arc::new(InMemorySettingsStore::new())
        }
    };

    // --- Dispatch ---
    let dispatcher = Arc::new(Dispatcher::with_placeholders(
        config.channel_send_timeout(),
    ));
    tracing::info!(
        send_timeout_ms = config.channel_send_timeout_ms,
        "Alert dispatcher ready (placeholder senders)"
    );

    // --- App state ---
    let state = AppState {
        store: Arc::clone(&store),
        processor: AlertProcessor::new(store, dispatcher),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
