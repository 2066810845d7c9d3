//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use destiny_matrix::MatrixEngine;
use tokio::net::TcpListener;

/// Destiny Matrix daemon server
pub struct Server {
    config: DaemonConfig,
    engine: MatrixEngine<'static>,
}

impl Server {
    /// Create a new server with the given configuration
    ///
    /// Builds and validates the catalog up front; a catalog that fails
    /// validation keeps the daemon from starting.
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let engine = MatrixEngine::new(config.matrix.clone())?;

        tracing::info!(
            layers = engine.catalog().layers().len(),
            total_cells = engine.catalog().total_cells(),
            "catalog loaded"
        );

        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &DaemonConfig {
        &self.config
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        let state = AppState::new(self.engine, self.config.default_locale);
        let app = create_router(state, &self.config.server);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("destiny daemon listening on {}", addr);
        tracing::info!("default locale: {}", self.config.default_locale);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("destiny daemon shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use destiny_matrix::{MatrixConfig, MatrixError};

    #[test]
    fn test_new_builds_engine() {
        let server = Server::new(DaemonConfig::default()).unwrap();
        assert_eq!(server.config().server.listen_addr.port(), 8080);
    }

    #[test]
    fn test_new_rejects_invalid_engine_config() {
        let config = DaemonConfig {
            matrix: MatrixConfig {
                synergy_min_layers: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = Server::new(config).err().unwrap();
        assert!(matches!(
            err,
            DaemonError::Engine(MatrixError::InvalidConfiguration(_))
        ));
    }
}
