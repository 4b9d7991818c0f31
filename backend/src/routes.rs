use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, request_context::request_context_middleware, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // The admin frontend is served from a different origin in development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/feedbacks", get(handlers::list_feedbacks))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn(request_context_middleware))
        .layer(cors)
}
