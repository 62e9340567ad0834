use axum::{
    extract::{Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{FeedCostsView, PRODUCTION_MONTHS};
use serde::Deserialize;
use tracing::{debug, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::helpers::errors::compute_error_response;
use crate::schemas::{ApiError, ApiResponse, AppState};

fn default_month() -> String {
    PRODUCTION_MONTHS[0].to_string()
}

fn validate_month(month: &str) -> Result<(), ValidationError> {
    if PRODUCTION_MONTHS.contains(&month) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_month"))
    }
}

/// Query parameters for the feed costs page
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct FeedCostsQuery {
    /// One of January, February or March (default: January)
    #[serde(default = "default_month")]
    #[validate(custom(function = "validate_month"))]
    pub month: String,
}

/// Get the feed costs page
///
/// Costs are placeholders drawn again on every request.
#[utoipa::path(
    get,
    path = "/api/v1/feed-costs",
    tag = "feed-costs",
    params(FeedCostsQuery),
    responses(
        (status = 200, description = "Feed costs retrieved successfully", body = ApiResponse<FeedCostsView>),
        (status = 400, description = "Unknown month", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_feed_costs(
    Valid(Query(query)): Valid<Query<FeedCostsQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FeedCostsView>>, ApiError> {
    trace!("Entering get_feed_costs function");

    let view = state
        .views
        .feed_costs(Some(&query.month))
        .map_err(compute_error_response)?;
    debug!("Drew {} feed costs for {}", view.costs.len(), view.selected_month);

    Ok(ApiResponse::ok(view, "Feed costs retrieved successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_validation() {
        assert!(FeedCostsQuery { month: default_month() }.validate().is_ok());
        assert!(FeedCostsQuery { month: "March".to_string() }.validate().is_ok());
        assert!(FeedCostsQuery { month: "April".to_string() }.validate().is_err());
    }
}
