/*
[INPUT]:  Call specifications and resolved wire payloads
[OUTPUT]: Raw transport responses (status, parsed body, optional fault)
[POS]:    HTTP layer - transport collaborator boundary
[UPDATE]: When transport framing, headers or TLS settings change
*/

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::wire::WireStruct;

use super::client::ClientConfig;
use super::error::{Result, SwsimError};
use super::response::RawResponse;
use super::soap;

/// Remote operation names, exactly as the service declares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AuthenticateUser,
    GetRates,
    CreateIndicium,
    ReprintIndicium,
    CancelIndicium,
    TrackShipment,
    CreateManifest,
    CleanseAddress,
    PurchasePostage,
    GetPurchaseStatus,
    CarrierPickup,
    GetPostageStatus,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AuthenticateUser => "AuthenticateUser",
            Operation::GetRates => "GetRates",
            Operation::CreateIndicium => "CreateIndicium",
            Operation::ReprintIndicium => "ReprintIndicium",
            Operation::CancelIndicium => "CancelIndicium",
            Operation::TrackShipment => "TrackShipment",
            Operation::CreateManifest => "CreateManifest",
            Operation::CleanseAddress => "CleanseAddress",
            Operation::PurchasePostage => "PurchasePostage",
            Operation::GetPurchaseStatus => "GetPurchaseStatus",
            Operation::CarrierPickup => "CarrierPickup",
            Operation::GetPostageStatus => "GetPostageStatus",
        }
    }

    /// Top-level element the service wraps this operation's response in.
    pub fn response_key(&self) -> &'static str {
        match self {
            Operation::AuthenticateUser => "AuthenticateUserResponse",
            Operation::GetRates => "GetRatesResponse",
            Operation::CreateIndicium => "CreateIndiciumResponse",
            Operation::ReprintIndicium => "ReprintIndiciumResponse",
            Operation::CancelIndicium => "CancelIndiciumResponse",
            Operation::TrackShipment => "TrackShipmentResponse",
            Operation::CreateManifest => "CreateManifestResponse",
            Operation::CleanseAddress => "CleanseAddressResponse",
            Operation::PurchasePostage => "PurchasePostageResponse",
            Operation::GetPurchaseStatus => "GetPurchaseStatusResponse",
            Operation::CarrierPickup => "CarrierPickupResponse",
            Operation::GetPostageStatus => "GetPostageStatusResponse",
        }
    }
}

/// Everything the transport needs for one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSpec {
    pub operation: Operation,
    /// `{namespace}/{operation}` action identifier attached to every call.
    pub action: String,
}

impl CallSpec {
    pub fn new(operation: Operation, namespace: &str) -> Self {
        Self {
            operation,
            action: format!("{}/{}", namespace, operation.name()),
        }
    }
}

/// Transport collaborator. One synchronous exchange per invocation; retry
/// and backoff belong to callers, not to implementations.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    async fn call(&self, spec: &CallSpec, payload: &WireStruct) -> Result<RawResponse>;
}

/// Production transport speaking the XML envelope over HTTPS via reqwest.
#[derive(Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
    namespace: String,
    namespace_identifier: String,
    log_messages: bool,
}

impl HttpTransport {
    /// Build a transport from client configuration. The TLS version is
    /// pinned to 1.2; open/read timeouts map onto connect/request timeouts.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.open_timeout)
            .timeout(config.read_timeout)
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .max_tls_version(reqwest::tls::Version::TLS_1_2)
            .build()?;

        Ok(Self {
            http,
            endpoint: Url::parse(&config.endpoint)?,
            namespace: config.namespace.clone(),
            namespace_identifier: config.namespace_identifier.clone(),
            log_messages: config.log_messages,
        })
    }
}

#[async_trait]
impl SoapTransport for HttpTransport {
    async fn call(&self, spec: &CallSpec, payload: &WireStruct) -> Result<RawResponse> {
        let envelope = soap::build_envelope(
            &self.namespace,
            &self.namespace_identifier,
            spec.operation.name(),
            payload,
        )?;

        if self.log_messages {
            tracing::debug!(operation = spec.operation.name(), action = %spec.action, "dispatching call");
            tracing::trace!(request = %envelope, "request envelope");
        }

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}\"", spec.action))
            .body(envelope)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if self.log_messages {
            tracing::trace!(status, response = %text, "response envelope");
        }

        // Intermediaries answer 502/503 with non-XML bodies; keep the raw
        // text so status classification can still carry it to the caller.
        let (fault, body) = match soap::parse_envelope(&text) {
            Ok(parsed) => parsed,
            Err(err) if status == 200 => return Err(err),
            Err(_) => (None, Value::String(text)),
        };

        Ok(RawResponse { status, body, fault })
    }
}

/// Recorded call captured by `MockTransport`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: Operation,
    pub action: String,
    pub payload: WireStruct,
}

/// Scripted transport for testing: replays queued responses in order and
/// records every payload it is handed.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response to replay.
    pub fn enqueue(&self, response: RawResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queue a 200 response with the given body and no fault.
    pub fn enqueue_ok(&self, body: Value) {
        self.enqueue(RawResponse {
            status: 200,
            body,
            fault: None,
        });
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made to the given operation, in order.
    pub fn calls_to(&self, operation: Operation) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.operation == operation)
            .collect()
    }
}

#[async_trait]
impl SoapTransport for MockTransport {
    async fn call(&self, spec: &CallSpec, payload: &WireStruct) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation: spec.operation,
            action: spec.action.clone(),
            payload: payload.clone(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SwsimError::InvalidResponse("mock transport queue is empty".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_spec_action_joins_namespace_and_operation() {
        let spec = CallSpec::new(Operation::GetRates, "urn:swsim");
        assert_eq!(spec.action, "urn:swsim/GetRates");
        assert_eq!(spec.operation.name(), "GetRates");
    }

    #[test]
    fn test_operation_response_keys() {
        assert_eq!(
            Operation::AuthenticateUser.response_key(),
            "AuthenticateUserResponse"
        );
        assert_eq!(Operation::CreateManifest.response_key(), "CreateManifestResponse");
    }

    #[tokio::test]
    async fn test_mock_transport_replays_and_records() {
        let mock = MockTransport::new();
        mock.enqueue_ok(json!({"GetRatesResponse": {}}));

        let spec = CallSpec::new(Operation::GetRates, "urn:swsim");
        let mut payload = WireStruct::new();
        payload.field("Carrier", "USPS");

        let raw = mock.call(&spec, &payload).await.unwrap();
        assert_eq!(raw.status, 200);

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation, Operation::GetRates);
        assert!(calls[0].payload.get("Carrier").is_some());

        let err = mock.call(&spec, &payload).await.unwrap_err();
        assert!(matches!(err, SwsimError::InvalidResponse(_)));
    }
}
