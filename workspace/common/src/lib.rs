//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod events;
mod feed_costs;
mod navigation;
mod production;
mod views;

pub use events::{EventAcknowledgement, EventEntryDto, ImageAttachment, LogEventRequest, RecentEventsView};
pub use feed_costs::{CostEntryDto, FeedCostsView};
pub use navigation::{Page, ViewState};
pub use production::{
    BarSeries, BoxPlot, BoxSummary, Histogram, HistogramBin, ProductionRecordDto, ProductionView,
    UploadResponse,
};
pub use views::{HomeView, QuickLink, RenderRequest, RenderResponse, RenderedView};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in shrimplab/src/schemas.rs with the
/// same field names. We mirror it here for the frontend to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Production months offered by the month pickers.
pub const PRODUCTION_MONTHS: [&str; 3] = ["January", "February", "March"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_round_trip() {
        let response = ApiResponse {
            data: vec![Page::Home, Page::EventsTimeline],
            message: "Pages retrieved successfully".to_string(),
            success: true,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"Events Timeline\""));

        let parsed: ApiResponse<Vec<Page>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.data, vec![Page::Home, Page::EventsTimeline]);
        assert!(parsed.success);
    }
}
