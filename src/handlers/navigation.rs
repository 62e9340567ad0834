use axum::{extract::State, response::Json};
use common::{Page, RenderRequest, RenderResponse};
use compute::views::RenderContext;
use tracing::{debug, info, instrument, trace};

use crate::helpers::errors::compute_error_response;
use crate::helpers::uploads::resolve_upload;
use crate::schemas::{ApiError, ApiResponse, AppState};

/// List the pages offered by the sidebar
#[utoipa::path(
    get,
    path = "/api/v1/pages",
    tag = "navigation",
    responses(
        (status = 200, description = "Pages retrieved successfully", body = ApiResponse<Vec<Page>>)
    )
)]
#[instrument]
pub async fn get_pages() -> Json<ApiResponse<Vec<Page>>> {
    trace!("Entering get_pages function");
    ApiResponse::ok(Page::ALL.to_vec(), "Pages retrieved successfully")
}

/// Render exactly one page for the given navigation state
///
/// Any pending navigation intent in `state` is applied first. `upload_id` is
/// only resolved when the production page renders. The returned state is what
/// the client should send with its next request.
#[utoipa::path(
    post,
    path = "/api/v1/views/render",
    tag = "navigation",
    request_body = RenderRequest,
    responses(
        (status = 200, description = "View rendered successfully", body = ApiResponse<RenderResponse>),
        (status = 400, description = "Unknown month", body = ErrorResponse),
        (status = 404, description = "Upload not found", body = ErrorResponse),
        (status = 422, description = "Uploaded table is missing a required column", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn render_view(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<ApiResponse<RenderResponse>>, ApiError> {
    trace!("Entering render_view function");
    let RenderRequest {
        state: mut view_state,
        month,
        upload_id,
    } = request;

    // Only the production page reads an upload; other pages ignore a stale id
    let page = view_state.next_render();
    let uploaded = match page {
        Page::GrowthsAndHarvests => resolve_upload(&state, upload_id.as_deref()).await?,
        _ => None,
    };
    let ctx = RenderContext { month, uploaded };

    let view = state
        .views
        .render(&mut view_state, &ctx)
        .map_err(compute_error_response)?;
    debug!("Rendered {} with state {:?}", view.page(), view_state);
    info!("View rendered: {}", view.page());

    Ok(ApiResponse::ok(
        RenderResponse {
            state: view_state,
            view,
        },
        "View rendered successfully",
    ))
}
