use serde::{Deserialize, Serialize};

/// Unified error type for all Alegra API operations.
///
/// Every non-success HTTP outcome is mapped to one of these variants before it
/// leaves the client, so callers never see a raw transport error. All variants
/// are serializable for structured error reporting.
///
/// None of these errors are retried by the client: a failure is terminal for
/// the call that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum AlegraError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request exceeded the client deadline.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rejected the basic-auth credentials (HTTP 401).
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user lacks permission for the requested resource (HTTP 403).
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested resource or entity does not exist (HTTP 404).
    NotFound {
        /// Request path that was not found.
        path: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Wait time in seconds suggested by the `Retry-After` header.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API failed on its side (HTTP 5xx).
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Any other non-success response.
    Api {
        /// HTTP status code.
        status: u16,
        /// Error code from the response body, if available.
        raw_code: Option<String>,
        /// Error message from the response body, or the body text itself.
        raw_message: String,
    },

    /// A request parameter is invalid (e.g. a blank entity id).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse a successful response body as JSON.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The client could not be constructed from the given configuration.
    Configuration {
        /// Details about the configuration problem.
        detail: String,
    },
}

impl AlegraError {
    /// Whether this is expected behavior (bad input, missing entity, etc.), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::NotFound { .. }
                | Self::RateLimited { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// HTTP status code associated with this error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidCredentials { .. } => Some(401),
            Self::PermissionDenied { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::ServerError { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::InvalidParameter { .. }
            | Self::ParseError { .. }
            | Self::Configuration { .. } => None,
        }
    }

    /// Stable machine-readable code, identical to the serialized `code` tag.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NetworkError { .. } => "NetworkError",
            Self::Timeout { .. } => "Timeout",
            Self::InvalidCredentials { .. } => "InvalidCredentials",
            Self::PermissionDenied { .. } => "PermissionDenied",
            Self::NotFound { .. } => "NotFound",
            Self::RateLimited { .. } => "RateLimited",
            Self::ServerError { .. } => "ServerError",
            Self::Api { .. } => "Api",
            Self::InvalidParameter { .. } => "InvalidParameter",
            Self::ParseError { .. } => "ParseError",
            Self::Configuration { .. } => "Configuration",
        }
    }
}

fn write_with_message(
    f: &mut std::fmt::Formatter<'_>,
    prefix: &str,
    raw_message: Option<&String>,
) -> std::fmt::Result {
    match raw_message {
        Some(msg) if !msg.is_empty() => write!(f, "[alegra] {prefix}: {msg}"),
        _ => write!(f, "[alegra] {prefix}"),
    }
}

impl std::fmt::Display for AlegraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "[alegra] Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "[alegra] Request timeout: {detail}"),
            Self::InvalidCredentials { raw_message } => {
                write_with_message(f, "Invalid credentials", raw_message.as_ref())
            }
            Self::PermissionDenied { raw_message } => {
                write_with_message(f, "Permission denied", raw_message.as_ref())
            }
            Self::NotFound { path, raw_message } => write_with_message(
                f,
                &format!("Resource '{path}' not found"),
                raw_message.as_ref(),
            ),
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "[alegra] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[alegra] Rate limited")
                }
            }
            Self::ServerError {
                status,
                raw_message,
            } => write_with_message(
                f,
                &format!("Server error (HTTP {status})"),
                raw_message.as_ref(),
            ),
            Self::Api {
                status,
                raw_code,
                raw_message,
            } => match raw_code {
                Some(code) => write!(f, "[alegra] API error (HTTP {status}, code {code}): {raw_message}"),
                None => write!(f, "[alegra] API error (HTTP {status}): {raw_message}"),
            },
            Self::InvalidParameter { param, detail } => {
                write!(f, "[alegra] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { detail } => write!(f, "[alegra] Parse error: {detail}"),
            Self::Configuration { detail } => {
                write!(f, "[alegra] Configuration error: {detail}")
            }
        }
    }
}

impl std::error::Error for AlegraError {}

/// Convenience type alias for `Result<T, AlegraError>`.
pub type Result<T> = std::result::Result<T, AlegraError>;
