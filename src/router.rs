use crate::handlers::{
    events::{get_events, log_event},
    feed_costs::get_feed_costs,
    health::health_check,
    home::get_home,
    navigation::{get_pages, render_view},
    production::{get_production, upload_production},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Navigation
        .route("/api/v1/pages", get(get_pages))
        .route("/api/v1/views/render", post(render_view))
        // Pages
        .route("/api/v1/home", get(get_home))
        .route("/api/v1/production", get(get_production))
        .route("/api/v1/production/uploads", post(upload_production))
        .route("/api/v1/feed-costs", get(get_feed_costs))
        .route("/api/v1/events", get(get_events).post(log_event))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
