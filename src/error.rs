//! Error taxonomy shared by the result model, the signer and the transport client.

use serde_json::Value;
use thiserror::Error;

/// Status codes reported in the `status` field of a geocoding response.
///
/// Anything other than `OK` is surfaced as [`GeocoderError::Service`]. Codes
/// this crate does not know about are kept verbatim in [`ServiceStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl ServiceStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "OK" => ServiceStatus::Ok,
            "ZERO_RESULTS" => ServiceStatus::ZeroResults,
            "OVER_QUERY_LIMIT" => ServiceStatus::OverQueryLimit,
            "REQUEST_DENIED" => ServiceStatus::RequestDenied,
            "INVALID_REQUEST" => ServiceStatus::InvalidRequest,
            "UNKNOWN_ERROR" => ServiceStatus::UnknownError,
            other => ServiceStatus::Other(other.to_string()),
        }
    }

    /// The status string exactly as the service spells it.
    pub fn as_str(&self) -> &str {
        match self {
            ServiceStatus::Ok => "OK",
            ServiceStatus::ZeroResults => "ZERO_RESULTS",
            ServiceStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ServiceStatus::RequestDenied => "REQUEST_DENIED",
            ServiceStatus::InvalidRequest => "INVALID_REQUEST",
            ServiceStatus::UnknownError => "UNKNOWN_ERROR",
            ServiceStatus::Other(code) => code,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ServiceStatus::Ok)
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum GeocoderError {
    /// Required structure (candidate list, geometry, formatted address) is missing.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Positional access past the end of a result collection.
    #[error("Index {index} out of range for {len} result(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The private signing key is not valid URL-safe base64.
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// The request URL could not be parsed.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The service answered with a non-OK `status`.
    ///
    /// `response` keeps the full decoded body so callers can inspect
    /// `error_message` and friends.
    #[error("Error {status}\nQuery: {url}")]
    Service {
        status: ServiceStatus,
        url: String,
        response: Option<Value>,
    },

    /// The HTTP exchange itself failed with a non-success status code.
    #[error("HTTP {code} for {url}")]
    HttpStatus {
        code: u16,
        url: String,
        body: Option<String>,
    },

    /// Transport-level failure reported by the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl GeocoderError {
    /// The service status, when this error came from a non-OK response.
    pub fn status(&self) -> Option<&ServiceStatus> {
        match self {
            GeocoderError::Service { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// A convenience `Result` type alias using the crate's `GeocoderError` type.
pub type Result<T> = std::result::Result<T, GeocoderError>;
