//! Startup orchestration.
//!
//! Order: verify the data file, bind the listener, install signal handlers,
//! serve. Any failure before serving is fatal and nothing is bound when the
//! data file is missing.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, ListenerConfig, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::spawn_signal_listener;

/// Fatal errors that stop the process.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The configured data file does not exist.
    #[error("Cannot find input file: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error after it started.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Fail fast when the data file is missing.
pub fn ensure_input_exists(path: &Path) -> Result<(), StartupError> {
    if path.exists() {
        Ok(())
    } else {
        Err(StartupError::InputMissing(path.to_path_buf()))
    }
}

/// Bind the listener. Host names are resolved.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| StartupError::Bind {
            address: config.bind_address(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listening for connections");
    }

    Ok(listener)
}

/// Run the service until a termination signal arrives.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    ensure_input_exists(&config.data.input)?;
    let listener = bind_listener(&config.listener).await?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    HttpServer::new(config)
        .run(listener, shutdown.subscribe())
        .await
        .map_err(StartupError::Serve)
}
