use axum::{extract::State, http::StatusCode, response::Json};
use common::{EventAcknowledgement, LogEventRequest, RecentEventsView};
use tracing::{info, instrument, trace};

use crate::schemas::{ApiResponse, AppState};

/// Get the events timeline
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "events",
    responses(
        (status = 200, description = "Recent events retrieved successfully", body = ApiResponse<RecentEventsView>)
    )
)]
#[instrument(skip(state))]
pub async fn get_events(State(state): State<AppState>) -> Json<ApiResponse<RecentEventsView>> {
    trace!("Entering get_events function");
    ApiResponse::ok(state.views.events(), "Recent events retrieved successfully")
}

/// Log a new event
///
/// Every well-formed submission is acknowledged, including an empty
/// description. The event is not stored and never joins the recent list.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "events",
    request_body = LogEventRequest,
    responses(
        (status = 201, description = "Event acknowledged", body = ApiResponse<EventAcknowledgement>),
        (status = 422, description = "Malformed date or time", body = ErrorResponse)
    )
)]
#[instrument(skip(request))]
pub async fn log_event(
    Json(request): Json<LogEventRequest>,
) -> (StatusCode, Json<ApiResponse<EventAcknowledgement>>) {
    trace!("Entering log_event function");

    let acknowledgement = compute::events::log_event(&request);
    info!("Event on {} acknowledged", request.date);

    let message = acknowledgement.message.clone();
    (StatusCode::CREATED, ApiResponse::ok(acknowledgement, message))
}
