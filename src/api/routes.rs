//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;

use super::generate;
use super::types::HealthResponse;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    let dev_mode = state.config.dev_mode;

    let mut router = Router::new()
        .route("/", get(generate::show_form).post(generate::submit_form))
        .route("/api/generate", post(generate::generate_json))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if dev_mode {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let state = Arc::new(AppState {
        config: config.clone(),
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(dev_mode = config.dev_mode, "Server listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dev_mode: state.config.dev_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_version() {
        let state = Arc::new(AppState {
            config: Config {
                dev_mode: true,
                ..Config::default()
            },
        });
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert!(body.dev_mode);
    }

    #[test]
    fn test_app_builds_in_both_modes() {
        let _ = app(Arc::new(AppState {
            config: Config::default(),
        }));
        let _ = app(Arc::new(AppState {
            config: Config {
                dev_mode: true,
                ..Config::default()
            },
        }));
    }
}
