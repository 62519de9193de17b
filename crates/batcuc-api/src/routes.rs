use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Analysis
        .route("/api/analysis/phone", post(handlers::phone_analysis))
        .route("/api/analysis/six-digit", post(handlers::six_digit_analysis))
        .route(
            "/api/analysis/compatibility",
            post(handlers::compatibility_analysis),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}
