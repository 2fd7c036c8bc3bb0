/*
[INPUT]:  Raw transport responses (status, parsed body, optional fault)
[OUTPUT]: Uniform annotated results or typed status errors
[POS]:    HTTP layer - response normalization and fault classification
[UPDATE]: When classification rules or the annotated shape change
*/

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::{Result, SwsimError};

/// Protocol-level fault reported by the service, independent of HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    pub fault_string: String,
    pub fault_code: Option<String>,
}

/// What the transport hands back: the HTTP status, the parsed body, and the
/// protocol fault if the envelope carried one.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
    pub fault: Option<Fault>,
}

/// The remote operation's response body with the two always-present reserved
/// fields: the ordered error list (empty on success) and the validity flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwsResponse {
    pub body: Map<String, Value>,
    pub errors: Vec<String>,
    pub valid: bool,
}

impl SwsResponse {
    /// Classify a raw transport response.
    ///
    /// A protocol fault wins over the HTTP status: it is recorded into the
    /// error list with the validity flag cleared, and no error is raised.
    /// Otherwise the enumerated status codes raise their typed errors and
    /// everything else passes through as success.
    pub fn normalize(raw: RawResponse) -> Result<SwsResponse> {
        let body = match raw.body {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("raw".to_string(), other);
                map
            }
        };

        if let Some(fault) = raw.fault {
            return Ok(SwsResponse {
                body,
                errors: vec![fault.fault_string],
                valid: false,
            });
        }

        if let Some(err) = SwsimError::from_status(raw.status, Value::Object(body.clone())) {
            return Err(err);
        }

        if raw.status != 200 {
            tracing::warn!(status = raw.status, "unclassified HTTP status passed through");
        }

        Ok(SwsResponse {
            body,
            errors: Vec::new(),
            valid: true,
        })
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Top-level body field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Walk nested body objects along `path`.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.body.get(*first)?, |value, key| value.get(key))
    }
}

/// Collect a response fragment into a list: absent or null becomes the empty
/// list, a lone entry becomes a one-element list, an array stays in order.
pub(crate) fn flatten(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, body: Value, fault: Option<Fault>) -> RawResponse {
        RawResponse { status, body, fault }
    }

    #[test]
    fn test_normalize_success() {
        let resp = SwsResponse::normalize(raw(
            200,
            json!({"GetRatesResponse": {"Rates": null}}),
            None,
        ))
        .unwrap();

        assert!(resp.valid());
        assert!(resp.errors().is_empty());
        assert!(resp.get("GetRatesResponse").is_some());
    }

    #[test]
    fn test_normalize_fault_wins_over_status() {
        let fault = Fault {
            fault_string: "Invalid SOAP message".to_string(),
            fault_code: Some("soap:Client".to_string()),
        };
        let resp = SwsResponse::normalize(raw(500, json!({}), Some(fault))).unwrap();

        assert!(!resp.valid());
        assert_eq!(resp.errors(), ["Invalid SOAP message"]);
    }

    #[test]
    fn test_normalize_not_found_carries_body() {
        let err = SwsResponse::normalize(raw(404, json!({"missing": true}), None)).unwrap_err();
        match err {
            SwsimError::NotFound { body } => assert_eq!(body["missing"], true),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_normalize_unclassified_status_passes_through() {
        let resp = SwsResponse::normalize(raw(302, json!({"Location": "elsewhere"}), None)).unwrap();
        assert!(resp.valid());
        assert!(resp.errors().is_empty());
    }

    #[test]
    fn test_get_path() {
        let resp = SwsResponse::normalize(raw(
            200,
            json!({"AuthenticateUserResponse": {"Authenticator": "tok"}}),
            None,
        ))
        .unwrap();

        assert_eq!(
            resp.get_path(&["AuthenticateUserResponse", "Authenticator"])
                .and_then(Value::as_str),
            Some("tok")
        );
        assert!(resp.get_path(&["AuthenticateUserResponse", "Missing"]).is_none());
    }

    #[test]
    fn test_flatten_variants() {
        assert!(flatten(None).is_empty());
        assert!(flatten(Some(&Value::Null)).is_empty());
        assert_eq!(flatten(Some(&json!({"Amount": "1.00"}))).len(), 1);
        assert_eq!(flatten(Some(&json!([1, 2, 3]))).len(), 3);
    }
}
