use common::UploadResponse;
use super::{ApiFailure, post_csv};

pub async fn upload_csv(csv: String) -> Result<UploadResponse, ApiFailure> {
    post_csv("/production/uploads", csv).await
}
