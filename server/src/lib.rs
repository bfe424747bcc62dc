//! # Sentiment API
//!
//! Keyword-lexicon sentiment scoring behind a small JSON API.
//!
//! Raw text runs through [`model::tokenize`], which strips ASCII
//! punctuation and lowercases before splitting on whitespace. Then
//! [`model::SentimentModel`] counts dictionary hits per polarity and
//! derives a label plus a confidence score. Handlers validate the request
//! and wrap the result in a response envelope. Nothing is stored between
//! requests.
//!
//!
//!
//! # Endpoints
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | GET | `/` | Service description and endpoint map |
//! | GET | `/health` | Liveness probe for the load balancer |
//! | POST | `/predict` | Score one text |
//! | POST | `/batch-predict` | Score up to 100 texts, order preserved |
//! | GET | `/metrics` | Static model metadata |
//!
//! Validation failures come back as `400` with `{"error": "..."}` naming
//! the violated rule; unknown paths and wrong methods get the same JSON
//! shape under `404`/`405`.
//!
//!
//!
//! # Configuration
//!
//! - `PORT`: listen port, defaults to 8080
//! - `ENVIRONMENT`: echoed in `/health` and `/`, defaults to `dev`
//! - `RUST_LOG`: tracing filter, defaults to `info`
//!
//!
//!
//! # Running
//!
//! Start the service.
//! ```sh
//! cargo run -p sentiment
//! ```
//!
//! Poke a running instance with the sample texts.
//! ```sh
//! cargo run -p tester
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod routes;
pub mod state;
pub mod utils;

use error::handle_panic;
use routes::{
    batch_predict_handler, health_handler, method_not_allowed_handler, metrics_handler,
    not_found_handler, predict_handler, root_handler,
};
use state::AppState;

/// Builds the full router; tests drive this directly without a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/predict", post(predict_handler))
        .route("/batch-predict", post(batch_predict_handler))
        .route("/metrics", get(metrics_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");
    info!("Environment: {}", state.config.environment);

    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
