pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assist::handlers as assist_handlers;
use crate::pdf::handlers as pdf_handlers;
use crate::sketch::handlers as sketch_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assist API
        .route("/api/v1/models", get(assist_handlers::handle_models))
        .route("/api/v1/ask", post(assist_handlers::handle_ask))
        // Sketch API
        .route("/api/v1/sketch", post(sketch_handlers::handle_sketch))
        .route(
            "/api/v1/sketch/prompt",
            get(sketch_handlers::handle_sketch_prompt),
        )
        // PDF export API
        .route("/api/v1/export", post(pdf_handlers::handle_export))
        .with_state(state)
}
