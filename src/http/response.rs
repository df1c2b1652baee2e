//! Response building and error mapping.
//!
//! # Design Decisions
//! - Success bodies are XML, failures are a fixed plain-text message
//! - Error details go to the log, never to the client

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::data::DataLoadError;
use crate::processing::ProcessingError;

pub const XML_CONTENT_TYPE: &str = "application/xml";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Body of every 500 response.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Per-request failures. Each one becomes a 500 and the server keeps going.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        internal_error_response()
    }
}

/// 200 with an XML body.
pub fn xml_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], body).into_response()
}

/// 500 with the generic plain-text body.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        INTERNAL_ERROR_BODY,
    )
        .into_response()
}
