//! HTTP server setup and handlers.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Dispatch item lookups to the upstream client and translator
//! - Map translation errors to HTTP status codes
//!
//! # Design Decisions
//! - Transport failures surface as 502 Bad Gateway
//! - Upstream status failures pass the upstream's own code through
//! - Failures are still well-formed JSON bodies: {"error": "..."}

use axum::{
    extract::{Path, State},
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::item::{translate, TranslationError};
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the REST front end.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server backed by the given upstream client.
    pub fn new(upstream: UpstreamClient) -> Self {
        let state = AppState { upstream };
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let request_id = HeaderName::from_static(X_REQUEST_ID);
        Router::new()
            .route("/", get(root))
            .route("/async-item/{item_id}", get(lookup_item))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `GET /` — fixed greeting, no upstream interaction.
async fn root() -> Json<serde_json::Value> {
    tracing::info!("root endpoint accessed");
    Json(json!({"message": "Hello, World!"}))
}

/// `GET /async-item/{item_id}` — fetch one item from the upstream provider.
///
/// A non-integer path segment is rejected by the extractor before this
/// handler runs.
async fn lookup_item(State(state): State<AppState>, Path(item_id): Path<i32>) -> Response {
    tracing::info!(item_id, "fetching item");

    let outcome = state.upstream.fetch_item(item_id).await;
    match translate(outcome) {
        Ok(item) => {
            tracing::info!(item_id, "item fetched");
            (StatusCode::OK, Json(item)).into_response()
        }
        Err(err) => {
            tracing::error!(item_id, error = %err, "item lookup failed");
            let body = Json(json!({"error": err.to_string()}));
            (error_status(&err), body).into_response()
        }
    }
}

/// Choose the HTTP status for a failed lookup.
fn error_status(err: &TranslationError) -> StatusCode {
    match err {
        TranslationError::Transport(_) => StatusCode::BAD_GATEWAY,
        TranslationError::UpstreamStatus(code) => {
            StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
        }
    }
}
