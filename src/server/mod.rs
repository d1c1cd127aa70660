//! Web application - server-rendered pages over the snippet store

use axum::{
    middleware as axum_mw,
    routing::get,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use crate::storage::SnippetStore;
use crate::templates::TemplateCache;

pub mod error;
pub mod middleware;
pub mod routes;

pub use error::ServerError;

/// Server state shared by every handler
pub struct AppState {
    pub store: SnippetStore,
    pub templates: TemplateCache,
}

/// Build the application router.
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/snippet/view/{id}", get(routes::snippet_view))
        .route(
            "/snippet/create",
            get(routes::snippet_create).post(routes::snippet_create_post),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(axum_mw::from_fn(middleware::secure_headers))
        .layer(axum_mw::from_fn(middleware::log_request))
        .with_state(state)
}

/// Serve until Ctrl-C or SIGTERM.
///
/// The store is moved into the server state and dropped, closing the pool,
/// once in-flight requests have finished.
pub async fn start_server(addr: &str, store: SnippetStore, static_dir: &Path) -> anyhow::Result<()> {
    let templates = TemplateCache::new()?;
    let state = Arc::new(AppState { store, templates });

    let app = router(state, static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
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
