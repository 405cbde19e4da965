//! Kiln compilation server.
//!
//! Exposes the compile core over HTTP.
//!
//! # Routes
//!
//! - `POST /compile`: `{ "id", "source" }` → `{ "id", "output" }` or `{ "id", "error" }`
//! - `GET /health`: liveness plus whether a compile is currently running

pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use kiln_core::{Compiler, Toolchain};

pub use error::{ServerError, ServerResult};
pub use routes::{AppState, create_router};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Parse host and port into a socket address.
    pub fn addr(&self) -> ServerResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

/// Serve compile requests until Ctrl+C.
pub async fn serve<T: Toolchain + 'static>(
    compiler: Compiler<T>,
    config: ServerConfig,
) -> ServerResult<()> {
    let addr = config.addr()?;
    let app = create_router(Arc::new(AppState { compiler }));

    tracing::info!("Starting Kiln server at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received shutdown signal");
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_invalid_address() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 1,
        };
        assert!(matches!(config.addr(), Err(ServerError::InvalidAddress(_))));
    }
}
