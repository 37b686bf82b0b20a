//! Board Host Shell
//!
//! HTTP layer that hosts the board, built with Axum. Every page request is
//! one mount: it performs its own single feed load and renders the result.
//!
//! # Endpoints
//!
//! ## Board
//! - `GET /` - Server-rendered appointment board (HTML)
//!
//! ## Feed
//! - `GET /api/appointments` - The feed as loaded, re-serialized as JSON
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Uptime and version
//!
//! # Example
//!
//! ```rust,ignore
//! use queueboard::api::{serve, AppState};
//! use queueboard::{AppointmentLoader, Config};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let loader = AppointmentLoader::new(config.loader_config())?;
//!
//!     let state = AppState::new(Arc::new(loader));
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/appointments", get(routes::appointments::list_appointments));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::board::board_page))
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        // The browser board may be pointed at /api/appointments from another origin
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the host shell
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Queue board listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Queue board shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LoadError, LOAD_FAILED_MESSAGE};
    use crate::loader::StaticSource;
    use crate::model::parse_appointments;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const FEED: &str = r#"[
        {
            "entities": {
                "client": { "firstName": "Ada", "lastName": "Lovelace" },
                "activity": { "externalId": "A1", "label": "Setup" },
                "progam": { "externalId": "P1", "label": "Geek Squad" }
            },
            "scheduledTime": "2024-03-15T14:30:00Z",
            "scheduledEndTime": "2024-03-15T15:00:00Z",
            "status": "Pending"
        }
    ]"#;

    fn create_test_app(result: Result<Vec<crate::Appointment>, LoadError>) -> Router {
        let source = Arc::new(StaticSource::new(result));
        build_router(AppState::new(source))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(Ok(vec![]));
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app(Ok(vec![]));
        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_board_page_loaded() {
        let app = create_test_app(Ok(parse_appointments(FEED).unwrap()));
        let (status, body) = get(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert_eq!(body.matches(r#"data-role="appointment-card""#).count(), 1);
        assert!(body.contains("Ada Lovelace"));
        assert!(body.contains("bg-yellow-100 text-yellow-800"));
        assert!(body.contains("March 15, 2024"));
    }

    #[tokio::test]
    async fn test_board_page_error_state() {
        let app = create_test_app(Err(LoadError::Http { status: 500 }));
        let (status, body) = get(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(LOAD_FAILED_MESSAGE));
        assert!(!body.contains("appointment-card"));
        assert!(!body.contains("status 500"));
    }

    #[tokio::test]
    async fn test_appointments_json() {
        let app = create_test_app(Ok(parse_appointments(FEED).unwrap()));
        let (status, body) = get(app, "/api/appointments").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json.as_array().map(|a| a.len()), Some(1));
        assert_eq!(json[0]["entities"]["client"]["firstName"], "Ada");
    }

    #[tokio::test]
    async fn test_appointments_upstream_failure() {
        let app = create_test_app(Err(LoadError::Network("connection refused".into())));
        let (status, body) = get(app, "/api/appointments").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "UPSTREAM_NETWORK");
        assert_eq!(json["error"]["message"], LOAD_FAILED_MESSAGE);
        assert!(json["request_id"].is_string());
    }
}
