//! Generic HTTP request handling
//!
//! One request path for every Alegra call: send, log, map the status to an
//! [`AlegraError`], read the body. The status mapping is always active, so
//! callers only ever see a JSON body or a structured error.
//!
//! There is no retry loop: a failed request fails the call that made it.

use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::AlegraError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP helper functions
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the body of a successful response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, query, headers)
    /// * `method_name` - request method, for logs
    /// * `path` - request path, for logs and `NotFound` errors
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(AlegraError)` - transport failure or mapped non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<String, AlegraError> {
        log::debug!("[alegra] {method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AlegraError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                AlegraError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[alegra] Response Status: {}", status.as_u16());

        // Retry-After has to be read before the body consumes the response
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let response_text = response
            .text()
            .await
            .map_err(|e| AlegraError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[alegra] Response Body: {}",
            truncate_for_log(&response_text)
        );

        if status.is_success() {
            return Ok(response_text);
        }

        let error = map_status_error(status, path, retry_after, &response_text);
        if error.is_expected() {
            log::warn!("[alegra] {method_name} {path} failed: {error}");
        } else {
            log::error!("[alegra] {method_name} {path} failed: {error}");
        }
        Err(error)
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(AlegraError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, AlegraError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[alegra] JSON parse failed: {e}");
            log::error!("[alegra] Raw response: {}", truncate_for_log(response_text));
            AlegraError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

/// Error body shapes Alegra uses.
///
/// Either `{"message": "...", "code": 1002}` or
/// `{"error": {"message": "...", "code": "..."}}`.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<Box<ApiErrorBody>>,
}

impl ApiErrorBody {
    fn into_parts(self) -> (Option<String>, Option<String>) {
        let code = self.code.and_then(|c| match c {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        match (code, self.message, self.error) {
            (None, None, Some(inner)) => inner.into_parts(),
            (code, message, _) => (code, message),
        }
    }
}

/// Extract `(code, message)` from an error body, falling back to the body text.
fn extract_api_error(body: &str) -> (Option<String>, Option<String>) {
    let (code, message) = serde_json::from_str::<ApiErrorBody>(body)
        .map(ApiErrorBody::into_parts)
        .unwrap_or_default();
    let message = message.or_else(|| {
        let trimmed = body.trim();
        (!trimmed.is_empty()).then(|| truncate_for_log(trimmed))
    });
    (code, message)
}

/// Map a non-success status to an [`AlegraError`].
pub(crate) fn map_status_error(
    status: StatusCode,
    path: &str,
    retry_after: Option<u64>,
    body: &str,
) -> AlegraError {
    let (raw_code, raw_message) = extract_api_error(body);

    match status {
        StatusCode::UNAUTHORIZED => AlegraError::InvalidCredentials { raw_message },
        StatusCode::FORBIDDEN => AlegraError::PermissionDenied { raw_message },
        StatusCode::NOT_FOUND => AlegraError::NotFound {
            path: path.to_string(),
            raw_message,
        },
        StatusCode::TOO_MANY_REQUESTS => AlegraError::RateLimited {
            retry_after,
            raw_message,
        },
        s if s.is_server_error() => AlegraError::ServerError {
            status: s.as_u16(),
            raw_message,
        },
        s => AlegraError::Api {
            status: s.as_u16(),
            raw_code,
            raw_message: raw_message.unwrap_or_else(|| {
                s.canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string()
            }),
        },
    }
}
