use axum::{http::StatusCode, response::Json};
use common::{
    BarSeries, BoxPlot, BoxSummary, CostEntryDto, EventAcknowledgement, EventEntryDto,
    FeedCostsView, Histogram, HistogramBin, HomeView, ImageAttachment, LogEventRequest, Page,
    ProductionRecordDto, ProductionView, QuickLink, RecentEventsView, RenderRequest,
    RenderResponse, RenderedView, UploadResponse, ViewState,
};
use compute::production::ProductionTable;
use compute::views::ViewRouter;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use utoipa::{OpenApi, ToSchema};

use crate::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<AppConfig>,
    /// Page renderers
    pub views: ViewRouter,
    /// Transient storage for uploaded tables
    pub cache: Cache<String, CachedData>,
    /// Source of upload ids
    pub upload_sequence: Arc<AtomicU64>,
}

impl AppState {
    /// Allocates an id for a new upload.
    pub fn next_upload_id(&self) -> String {
        let sequence = self.upload_sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("upload-{}", sequence)
    }
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Upload(ProductionTable),
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            data,
            message: message.into(),
            success: true,
        })
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of uploaded tables currently held
    pub cached_uploads: u64,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::navigation::get_pages,
        crate::handlers::navigation::render_view,
        crate::handlers::home::get_home,
        crate::handlers::production::get_production,
        crate::handlers::production::upload_production,
        crate::handlers::feed_costs::get_feed_costs,
        crate::handlers::events::get_events,
        crate::handlers::events::log_event,
    ),
    components(
        schemas(
            ApiResponse<ProductionView>,
            ErrorResponse,
            HealthResponse,
            Page,
            ViewState,
            RenderRequest,
            RenderResponse,
            RenderedView,
            HomeView,
            QuickLink,
            ProductionView,
            ProductionRecordDto,
            BarSeries,
            Histogram,
            HistogramBin,
            BoxPlot,
            BoxSummary,
            UploadResponse,
            FeedCostsView,
            CostEntryDto,
            RecentEventsView,
            EventEntryDto,
            LogEventRequest,
            ImageAttachment,
            EventAcknowledgement,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "navigation", description = "Page selection and rendering"),
        (name = "home", description = "Home page"),
        (name = "production", description = "Growths and harvests"),
        (name = "feed-costs", description = "Feed costs per run"),
        (name = "events", description = "Events timeline"),
    ),
    info(
        title = "ShrimpLab API",
        description = "Shrimp larvae production lab dashboard API",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
