/*
[INPUT]:  Error sources (HTTP status, transport, authentication, XML codec)
[OUTPUT]: Structured error types carrying the raw response body
[POS]:    Error handling layer - unified error types for the entire crate
[UPDATE]: When the remote service grows new failure modes
*/

use serde_json::Value;
use thiserror::Error;

/// Main error type for the SWSIM adapter.
///
/// Status-code variants each carry the raw response body so callers can
/// inspect whatever the service sent alongside the failure. Protocol faults
/// are not represented here: they are recovered into `SwsResponse` and must
/// be read from its `errors` list.
#[derive(Error, Debug)]
pub enum SwsimError {
    /// The token exchange did not yield an authenticator
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// HTTP 400
    #[error("(400): BadRequest")]
    BadRequest { body: Value },

    /// HTTP 401
    #[error("(401): Unauthorized")]
    Unauthorized { body: Value },

    /// HTTP 403
    #[error("(403): Forbidden")]
    Forbidden { body: Value },

    /// HTTP 404
    #[error("(404): NotFound")]
    NotFound { body: Value },

    /// HTTP 406
    #[error("(406): NotAcceptable")]
    NotAcceptable { body: Value },

    /// HTTP 500
    #[error("(500): the postage service had an internal error")]
    InternalServerError { body: Value },

    /// HTTP 502 or 503
    #[error("({status}): ServiceUnavailable")]
    ServiceUnavailable { status: u16, body: Value },

    /// HTTP request failed before a response was classified
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Envelope serialization or parsing failed
    #[error("XML envelope error: {0}")]
    Xml(String),

    /// Endpoint URL is invalid
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SwsimError {
    /// Map a non-200 status to its error kind. `None` means the status is
    /// outside the classified set and is passed through as success.
    pub fn from_status(status: u16, body: Value) -> Option<Self> {
        match status {
            400 => Some(SwsimError::BadRequest { body }),
            401 => Some(SwsimError::Unauthorized { body }),
            403 => Some(SwsimError::Forbidden { body }),
            404 => Some(SwsimError::NotFound { body }),
            406 => Some(SwsimError::NotAcceptable { body }),
            500 => Some(SwsimError::InternalServerError { body }),
            502 | 503 => Some(SwsimError::ServiceUnavailable { status, body }),
            _ => None,
        }
    }

    /// The HTTP status this error classifies, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SwsimError::BadRequest { .. } => Some(400),
            SwsimError::Unauthorized { .. } => Some(401),
            SwsimError::Forbidden { .. } => Some(403),
            SwsimError::NotFound { .. } => Some(404),
            SwsimError::NotAcceptable { .. } => Some(406),
            SwsimError::InternalServerError { .. } => Some(500),
            SwsimError::ServiceUnavailable { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body carried by a status error.
    pub fn body(&self) -> Option<&Value> {
        match self {
            SwsimError::BadRequest { body }
            | SwsimError::Unauthorized { body }
            | SwsimError::Forbidden { body }
            | SwsimError::NotFound { body }
            | SwsimError::NotAcceptable { body }
            | SwsimError::InternalServerError { body }
            | SwsimError::ServiceUnavailable { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if the error indicates an authentication problem.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            SwsimError::Authentication { .. } | SwsimError::Unauthorized { .. }
        )
    }
}

/// Result type alias for SWSIM operations.
pub type Result<T> = std::result::Result<T, SwsimError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_status_classified_codes() {
        let err = SwsimError::from_status(404, json!({"detail": "missing"})).unwrap();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.body().unwrap()["detail"], "missing");

        let err = SwsimError::from_status(503, Value::Null).unwrap();
        assert!(matches!(err, SwsimError::ServiceUnavailable { status: 503, .. }));
    }

    #[test]
    fn test_from_status_unclassified_codes_pass() {
        assert!(SwsimError::from_status(200, Value::Null).is_none());
        assert!(SwsimError::from_status(302, Value::Null).is_none());
        assert!(SwsimError::from_status(418, Value::Null).is_none());
    }

    #[test]
    fn test_is_auth_error() {
        let auth = SwsimError::Authentication {
            message: "bad integration id".to_string(),
        };
        assert!(auth.is_auth_error());
        assert!(SwsimError::from_status(401, Value::Null).unwrap().is_auth_error());
        assert!(!SwsimError::from_status(400, Value::Null).unwrap().is_auth_error());
    }
}
