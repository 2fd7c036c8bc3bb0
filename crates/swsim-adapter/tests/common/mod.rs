/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for swsim-adapter tests

use swsim_adapter::{ClientConfig, Credentials};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials used across tests
pub fn test_credentials() -> Credentials {
    Credentials::new("test-integration-id", "test-user", "test-pass")
}

/// Client configuration pointed at a mock server
#[allow(dead_code)]
pub fn test_config(endpoint: &str) -> ClientConfig {
    ClientConfig {
        endpoint: endpoint.to_string(),
        ..Default::default()
    }
}

/// Wrap operation response XML in a response envelope
#[allow(dead_code)]
pub fn soap_response(inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>{inner}</soap:Body>
</soap:Envelope>"#
    )
}

/// A response envelope carrying a protocol fault
#[allow(dead_code)]
pub fn fault_response(fault_string: &str) -> String {
    soap_response(&format!(
        "<soap:Fault><faultcode>soap:Client</faultcode><faultstring>{fault_string}</faultstring></soap:Fault>"
    ))
}

/// An AuthenticateUser response carrying a token
#[allow(dead_code)]
pub fn authenticate_response(token: &str) -> String {
    soap_response(&format!(
        "<AuthenticateUserResponse><Authenticator>{token}</Authenticator></AuthenticateUserResponse>"
    ))
}
