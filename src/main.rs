//! Bank registry HTTP service.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /?mfo=true&normal=true
//!     ──────────────────────────▶ http::server ──▶ processing::flags
//!                                      │
//!                                      ▼
//!                               data::loader (re-reads the JSON file)
//!                                      │
//!                                      ▼
//!                               processing::processor (filter + project)
//!                                      │
//!                                      ▼
//!     ◀────────────────────────── processing::document (XML)
//! ```

use clap::Parser;
use std::process::ExitCode;

use bank_registry::cli::Cli;
use bank_registry::lifecycle;
use bank_registry::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = logging::init(&config.observability) {
        eprintln!("Warning: logging not initialized: {e}");
    }

    tracing::info!(
        input = %config.data.input.display(),
        host = %config.listener.host,
        port = config.listener.port,
        xml_indent = config.xml.indent,
        "Configuration loaded"
    );

    match lifecycle::run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}
