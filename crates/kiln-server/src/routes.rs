//! HTTP routes for the Kiln server.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use kiln_core::{CompileRequest, CompileResult, Compiler, Toolchain};
use tower_http::cors::CorsLayer;

/// Application state shared across handlers.
pub struct AppState<T> {
    /// Request handler for compile submissions.
    pub compiler: Compiler<T>,
}

/// Create the router with all routes.
pub fn create_router<T: Toolchain + 'static>(state: Arc<AppState<T>>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<T>))
        .route("/compile", post(compile_handler::<T>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler.
async fn health_handler<T: Toolchain + 'static>(
    State(state): State<Arc<AppState<T>>>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "compiler_busy": state.compiler.gate().is_busy(),
    }))
}

/// Compile a submitted snippet.
///
/// Always answers 200: compiler rejections are part of the result body.
async fn compile_handler<T: Toolchain + 'static>(
    State(state): State<Arc<AppState<T>>>,
    Json(request): Json<CompileRequest>,
) -> Json<CompileResult> {
    Json(state.compiler.handle(request).await)
}
