use common::{RenderRequest, RenderResponse};
use super::{ApiFailure, post};

/// Render the page selected by `request.state`
///
/// The returned state has any pending navigation applied and must be sent
/// back with the next request.
pub async fn render_view(request: &RenderRequest) -> Result<RenderResponse, ApiFailure> {
    post("/views/render", request).await
}
