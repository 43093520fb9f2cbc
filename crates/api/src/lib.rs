//! `api` crate — HTTP REST API layer.
//!
//! Exposes, for each of `jobs`, `employees` and `job_history`:
//!   GET    /api/{collection}
//!   POST   /api/{collection}
//!   GET    /api/{collection}/{id}
//!   PUT    /api/{collection}/{id}
//!   DELETE /api/{collection}/{id}

pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::ApiError;
pub use handlers::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/jobs", get(handlers::jobs::list).post(handlers::jobs::create))
        .route(
            "/jobs/{job_id}",
            get(handlers::jobs::get)
                .put(handlers::jobs::update)
                .delete(handlers::jobs::delete),
        )
        .route(
            "/employees",
            get(handlers::employees::list).post(handlers::employees::create),
        )
        .route(
            "/employees/{employee_id}",
            get(handlers::employees::get)
                .put(handlers::employees::update)
                .delete(handlers::employees::delete),
        )
        .route(
            "/job_history",
            get(handlers::job_history::list).post(handlers::job_history::create),
        )
        .route(
            "/job_history/{job_history_id}",
            get(handlers::job_history::get)
                .put(handlers::job_history::update)
                .delete(handlers::job_history::delete),
        );

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve the API until Ctrl+C or SIGTERM.
pub async fn serve(addr: &str, pool: db::DbPool) -> std::io::Result<()> {
    let app = router(AppState { pool });
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Received Ctrl+C, shutting down"),
        _ = terminate => warn!("Received SIGTERM, shutting down"),
    }
}
