//! Scrum poker server binary.

use std::sync::Arc;
use std::time::Duration;

use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
    sync::watch,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use scrum_poker::adapters::http::{app_router, SessionAppState};
use scrum_poker::adapters::{InMemorySessionStore, OpaqueTokenValidator};
use scrum_poker::application::{EvictIdleSessionsConfig, EvictIdleSessionsHandler};
use scrum_poker::config::AppConfig;
use scrum_poker::ports::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;
    if config.is_production() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    config.validate()?;
    let addr = config.server.socket_addr()?;
    let default_deck = config.session.default_deck()?;

    info!(
        environment = ?config.server.environment,
        unknown_session_policy = ?config.session.unknown_session_policy,
        "Initializing state..."
    );
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new(default_deck.clone()));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reaper = EvictIdleSessionsHandler::new(
        store.clone(),
        EvictIdleSessionsConfig {
            interval: config.session.cleanup_interval(),
            max_idle: config.session.max_idle(),
        },
    );
    let reaper_task = tokio::spawn(async move { reaper.run(shutdown_rx).await });

    let state = SessionAppState::new(
        store,
        config.session.unknown_session_policy,
        default_deck,
        config.session.poll_interval_ms,
    );
    let app = app_router(state, Arc::new(OpaqueTokenValidator::new()), &config.server);

    info!("Binding to {addr}");
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    let _ = shutdown_tx.send(true);
    let grace = Duration::from_secs(config.server.shutdown_timeout_secs);
    if tokio::time::timeout(grace, reaper_task).await.is_err() {
        tracing::warn!("Idle session reaper did not stop in time");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
