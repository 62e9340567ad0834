pub mod events;
pub mod production;
pub mod views;

use common::ApiResponse;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Error Response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub success: bool,
}

pub const UPLOAD_NOT_FOUND: &str = "UPLOAD_NOT_FOUND";
pub const SCHEMA_LOOKUP_FAILED: &str = "SCHEMA_LOOKUP_FAILED";
pub const COLUMN_TYPE_MISMATCH: &str = "COLUMN_TYPE_MISMATCH";

/// A failed call. `code` is the server's error code when it sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub message: String,
    pub code: Option<String>,
}

impl ApiFailure {
    fn local(message: String) -> Self {
        Self { message, code: None }
    }

    /// The uploaded table is gone or unusable; sample data still renders.
    pub fn is_upload_problem(&self) -> bool {
        matches!(
            self.code.as_deref(),
            Some(UPLOAD_NOT_FOUND | SCHEMA_LOOKUP_FAILED | COLUMN_TYPE_MISMATCH)
        )
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Unwraps the `data` of a successful response, or the server's error
async fn read_response<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiFailure>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("{} {} - API error {}: {}", method, endpoint, err.code, err.error);
                ApiFailure {
                    message: format!("Error: {}", err.error),
                    code: Some(err.code),
                }
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("{} {} - {}", method, endpoint, error_msg);
                ApiFailure::local(error_msg)
            }
        });
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("{} {} - {}", method, endpoint, error_msg);
        ApiFailure::local(error_msg)
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(api_response.data)
}

fn request_failed(method: &str, endpoint: &str, e: gloo_net::Error) -> ApiFailure {
    let error_msg = format!("Request failed: {}", e);
    log::error!("{} {} - {}", method, endpoint, error_msg);
    ApiFailure::local(error_msg)
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiFailure>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            ApiFailure::local(error_msg)
        })?
        .send()
        .await
        .map_err(|e| request_failed("POST", endpoint, e))?;

    read_response("POST", endpoint, response).await
}

/// POST a raw CSV body
pub async fn post_csv<T>(endpoint: &str, csv: String) -> Result<T, ApiFailure>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST CSV ({} bytes) to: {}", csv.len(), url);

    let response = Request::post(&url)
        .header("Content-Type", "text/csv")
        .body(csv)
        .map_err(|e| request_failed("POST", endpoint, e))?
        .send()
        .await
        .map_err(|e| request_failed("POST", endpoint, e))?;

    read_response("POST", endpoint, response).await
}
