use std::time::Duration;

use crate::{ApiError, FailureKind};

/// Builds the shared reqwest client with the configured timeouts.
pub(crate) fn build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))
}

/// Turns a non-2xx response into an `ApiError`, surfacing the body text
/// when the collaborator sent one.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    let message = if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    };
    Err(ApiError::new(FailureKind::HttpStatus(status.as_u16()), message))
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, "request timed out");
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

/// Parses and joins a path onto the configured base URL.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<url::Url, ApiError> {
    let base = url::Url::parse(base_url)
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
    base.join(path)
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
}
