use axum::{extract::State, response::Json};
use common::HomeView;
use tracing::{debug, instrument};

use crate::schemas::{ApiResponse, AppState};

/// Get the home page
///
/// The unread email count is drawn again on every request.
#[utoipa::path(
    get,
    path = "/api/v1/home",
    tag = "home",
    responses(
        (status = 200, description = "Home page retrieved successfully", body = ApiResponse<HomeView>)
    )
)]
#[instrument(skip(state))]
pub async fn get_home(State(state): State<AppState>) -> Json<ApiResponse<HomeView>> {
    let home = state.views.home();
    debug!("Home rendered with {} unread emails", home.unread_emails);
    ApiResponse::ok(home, "Home page retrieved successfully")
}
