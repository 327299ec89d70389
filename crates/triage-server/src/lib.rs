//! # triage-server
//!
//! The classification service: an axum router answering `POST /classify`
//! with the local classifier and response composer, plus `GET /health` and
//! `GET /info`. It is the peer that `triage-remote` clients talk to by
//! default.

mod error;
mod routes;

pub use error::ServerError;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use triage_classify::{Classifier, HeuristicClassifier, KeywordTable};
use triage_config::{ClassifierConfig, ServerConfig};

pub const SERVICE_NAME: &str = "Email Classifier API";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// State shared across handlers.
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
}

/// Build the service router around `classifier`.
pub fn router(classifier: Arc<dyn Classifier>) -> Router {
    let state = Arc::new(AppState { classifier });

    Router::new()
        .merge(routes::api_routes())
        .fallback(routes::not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// The heuristic classifier with any configured extra keywords.
#[must_use]
pub fn configured_classifier(config: &ClassifierConfig) -> Arc<dyn Classifier> {
    let table = KeywordTable::with_extra(&config.extra_productive, &config.extra_unproductive);
    Arc::new(HeuristicClassifier::new(table))
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the accept loop fails.
pub async fn serve(
    listener: TcpListener,
    classifier: Arc<dyn Classifier>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "classification service listening");
    }

    axum::serve(listener, router(classifier))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind the configured address and serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address cannot be bound, or
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn run(
    config: &ServerConfig,
    classifier: Arc<dyn Classifier>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve(listener, classifier, shutdown).await
}
