use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{ProductionView, UploadResponse};
use compute::production::ProductionTable;
use serde::Deserialize;
use tracing::{debug, info, instrument, trace, warn};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::helpers::errors::compute_error_response;
use crate::helpers::uploads::{resolve_upload, store_upload};
use crate::schemas::{ApiError, ApiResponse, AppState};

/// Query parameters for the growths and harvests page
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct ProductionQuery {
    /// Month to show (default: first month of the table)
    #[validate(length(min = 1, max = 64))]
    pub month: Option<String>,
    /// Uploaded table to use instead of generated sample data
    #[validate(length(min = 1, max = 64))]
    pub upload_id: Option<String>,
}

/// Get the growths and harvests page
///
/// Without `upload_id` a fresh sample table is generated. A month absent
/// from the table yields an empty view.
#[utoipa::path(
    get,
    path = "/api/v1/production",
    tag = "production",
    params(ProductionQuery),
    responses(
        (status = 200, description = "Production view retrieved successfully", body = ApiResponse<ProductionView>),
        (status = 404, description = "Upload not found", body = ErrorResponse),
        (status = 422, description = "Uploaded table is missing a required column", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_production(
    Valid(Query(query)): Valid<Query<ProductionQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProductionView>>, ApiError> {
    trace!("Entering get_production function");

    let uploaded = resolve_upload(&state, query.upload_id.as_deref()).await?;
    let view = state
        .views
        .production(uploaded, query.month.as_deref())
        .map_err(compute_error_response)?;

    info!(
        "Production view for {:?} with {} records",
        view.selected_month,
        view.records.len()
    );
    Ok(ApiResponse::ok(view, "Production view retrieved successfully"))
}

/// Upload a production CSV
///
/// The body is the raw CSV text with a header row. Only parsing is checked
/// here; missing columns surface when the upload is rendered.
#[utoipa::path(
    post,
    path = "/api/v1/production/uploads",
    tag = "production",
    request_body(content = String, description = "CSV with tank, gross_millions and production_month columns", content_type = "text/csv"),
    responses(
        (status = 201, description = "Upload stored", body = ApiResponse<UploadResponse>),
        (status = 400, description = "Body is not a readable CSV", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn upload_production(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponse>>), ApiError> {
    trace!("Entering upload_production function");

    let table = ProductionTable::from_csv(body.into_bytes()).map_err(|e| {
        warn!("Failed to parse uploaded CSV: {}", e);
        compute_error_response(e)
    })?;

    let rows = table.height();
    let columns = table.column_names();
    debug!("Parsed upload with {} rows and columns {:?}", rows, columns);

    let upload_id = store_upload(&state, table).await;
    info!("Stored upload '{}' with {} rows", upload_id, rows);

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(
            UploadResponse {
                upload_id,
                rows,
                columns,
            },
            "Upload stored successfully",
        ),
    ))
}
