//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! HTTP requests:
//!     → tower-http TraceLayer span (method, uri, request id)
//! ```

pub mod logging;
