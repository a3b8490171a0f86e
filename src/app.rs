//! Application assembly: config, state, and the serve loop.

use crate::config::Config;
use crate::state::AppState;
use crate::tvmaze::TvMazeApi;
use crate::web::create_router;
use anyhow::Context;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::pin::pin;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Main application struct containing all necessary components
pub struct App {
    config: Config,
    app_state: AppState,
}

impl App {
    /// Create a new App instance with all necessary components initialized
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let api = TvMazeApi::new(config.tvmaze_base_url.clone())
            .context("Failed to create TVMaze client")?;
        let app_state = AppState::new(Arc::new(api));

        Ok(App { config, app_state })
    }

    /// Serve until a shutdown signal arrives, then drain within the
    /// configured timeout.
    pub async fn run(self) -> ExitCode {
        let router = create_router(self.app_state);
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));

        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!(addr = %addr, error = %e, "Failed to bind listener");
                return ExitCode::FAILURE;
            }
        };
        info!(addr = %addr, upstream = %self.config.tvmaze_base_url, "web server listening");

        let drain_timeout = Duration::from_secs(self.config.shutdown_timeout);
        let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();

        let graceful = axum::serve(listener, router).with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("shutdown signal received, draining connections");
            let _ = signal_tx.send(());
        });
        let mut graceful = pin!(graceful.into_future());

        tokio::select! {
            result = &mut graceful => match result {
                Ok(()) => {
                    info!("web server stopped cleanly");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error = %e, "web server error");
                    ExitCode::FAILURE
                }
            },
            _ = async {
                let _ = signal_rx.await;
                tokio::time::sleep(drain_timeout).await;
            } => {
                warn!(timeout = ?drain_timeout, "drain timeout exceeded, abandoning in-flight requests");
                ExitCode::SUCCESS
            }
        }
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
