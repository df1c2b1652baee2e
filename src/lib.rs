//! Bank registry service library.
//!
//! Loads a JSON file of bank records on every request, filters and projects
//! them according to the query string, and answers with XML.

pub mod cli;
pub mod config;
pub mod data;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod processing;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
