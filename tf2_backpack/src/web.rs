//! Web server for the backpack viewer
//!
//! Serves the backpack JSON API and the compiled frontend.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::backpack::BackpackService;
use crate::models::Failure;

/// Shared application state
#[derive(Clone)]
struct AppState {
    service: Arc<BackpackService>,
}

/// GET /backpack/{handle}
///
/// Failures about the requested user are answered with 200 and a failure
/// body; Steam or internal failures with 502.
async fn backpack_handler(
    State(state): State<AppState>,
    UrlPath(handle): UrlPath<String>,
) -> Response {
    match state.service.get_backpack(&handle).await {
        Ok(backpack) => Json(backpack).into_response(),
        Err(e) if e.is_user_facing() => {
            log::info!("Backpack request for {} failed: {}", handle, e);
            Json(Failure::new(e.user_message())).into_response()
        }
        Err(e) => {
            log::error!("Backpack request for {} failed: {}", handle, e);
            (StatusCode::BAD_GATEWAY, Json(Failure::new(e.user_message()))).into_response()
        }
    }
}

/// Build the web server router
///
/// Anything that is not an API route falls through to the static directory,
/// `/` serving its `index.html`.
pub fn create_router(service: Arc<BackpackService>, static_dir: &Path) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/backpack/{handle}", get(backpack_handler))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
}

/// Start the web server (async)
pub async fn serve(
    service: Arc<BackpackService>,
    static_dir: &Path,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(service, static_dir);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Backpack server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
