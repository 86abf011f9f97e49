use salarium_core::AppError;
use serde::de::DeserializeOwned;

/// Map a reqwest transport error onto the application taxonomy,
/// distinguishing timeouts and connection failures from the rest.
pub(crate) fn transport_error(e: reqwest::Error, timeout_secs: u64) -> AppError {
    if e.is_timeout() {
        AppError::Timeout(timeout_secs)
    } else if e.is_connect() {
        AppError::Network(format!("Connection failed: {e}"))
    } else {
        AppError::Http(e.to_string())
    }
}

/// Reject non-success responses, then decode the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::HttpStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Http(format!("Failed to read response body: {e}")))?;

    Ok(serde_json::from_str(&body)?)
}
