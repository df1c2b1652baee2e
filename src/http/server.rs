//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the bank list handler
//! - Wire up middleware (request ID, tracing, CORS, panic recovery)
//! - Serve on a bound listener until shutdown is signalled

use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::{header, HeaderValue, Request},
    response::Response,
    routing::any,
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServiceConfig;
use crate::data::DataLoader;
use crate::http::response::{self, AppError};
use crate::lifecycle::shutdown;
use crate::processing::{process, QueryFlags};

/// Application state injected into handlers. Immutable for the server's
/// lifetime.
#[derive(Debug, Clone)]
pub struct AppState {
    pub loader: Arc<DataLoader>,
    pub xml_indent: usize,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            loader: Arc::new(DataLoader::new(config.data.input.clone())),
            xml_indent: config.xml.indent,
        }
    }
}

/// HTTP server for the bank registry.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    pub fn new(config: ServiceConfig) -> Self {
        let router = build_router(AppState::from_config(&config));
        Self { router, config }
    }

    /// Run the server on `listener` until `shutdown_rx` fires, then let
    /// in-flight requests finish.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            input = %self.config.data.input.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Every method on every path lands on the bank list.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", any(banks_handler))
        .route("/{*path}", any(banks_handler))
        .with_state(state);

    with_middleware(routes)
}

/// Layers shared by all routes. The last layer added runs first.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Load, filter, project and render the bank list.
async fn banks_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let flags = QueryFlags::from_query(query.as_deref());

    let records = state.loader.load().await?;
    let document = process(&records, flags);
    let body = document.to_xml(state.xml_indent)?;

    tracing::debug!(
        mfo = flags.mfo,
        normal = flags.normal,
        banks = document.len(),
        "Bank list rendered"
    );

    Ok(response::xml_response(body))
}

fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };

    tracing::error!(panic = %detail, "Handler panicked");
    response::internal_error_response()
}
