use axum::{http::StatusCode, response::Json};
use compute::error::ComputeError;
use tracing::{error, warn};

use crate::schemas::{ApiError, ErrorResponse};

/// Maps a compute failure to its HTTP status and error code
pub fn compute_error_response(err: ComputeError) -> ApiError {
    let (status, code) = match &err {
        ComputeError::ColumnNotFound(_) => (StatusCode::UNPROCESSABLE_ENTITY, "SCHEMA_LOOKUP_FAILED"),
        ComputeError::ColumnType { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "COLUMN_TYPE_MISMATCH"),
        ComputeError::Csv(_) => (StatusCode::BAD_REQUEST, "INVALID_CSV"),
        ComputeError::UnknownMonth(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_MONTH"),
        ComputeError::DataFrame(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATAFRAME_ERROR"),
    };

    if status.is_server_error() {
        error!("Compute failure: {}", err);
    } else {
        warn!("Rejected request: {}", err);
    }

    (status, Json(ErrorResponse::new(err.to_string(), code)))
}

pub fn upload_not_found(upload_id: &str) -> ApiError {
    warn!("Upload '{}' not found or expired", upload_id);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            format!("Upload '{}' not found or expired", upload_id),
            "UPLOAD_NOT_FOUND",
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_is_unprocessable() {
        let (status, Json(body)) =
            compute_error_response(ComputeError::ColumnNotFound("production_month".to_string()));

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "SCHEMA_LOOKUP_FAILED");
        assert!(body.error.contains("production_month"));
        assert!(!body.success);
    }

    #[test]
    fn test_bad_csv_is_bad_request() {
        let (status, Json(body)) = compute_error_response(ComputeError::Csv("empty".to_string()));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_CSV");
    }
}
