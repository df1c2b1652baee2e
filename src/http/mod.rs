//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, handler)
//!     → processing (flags, filter, projection, XML)
//!     → response.rs (status, headers, error mapping)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::AppError;
pub use server::{build_router, AppState, HttpServer};
