/*
[INPUT]:  Client configuration (endpoint, namespace, timeouts, credentials)
[OUTPUT]: Dispatched calls through the transport collaborator
[POS]:    HTTP layer - core client and request dispatcher
[UPDATE]: When connection options or the dispatch contract change
*/

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AuthManager, AuthMode};
use crate::types::Credentials;
use crate::wire::{ToWire, WireStruct};

use super::error::Result;
use super::response::SwsResponse;
use super::transport::{CallSpec, HttpTransport, Operation, SoapTransport};

/// Production endpoint and namespace for the SWSIM v135 service.
const DEFAULT_ENDPOINT: &str = "https://swsim.stamps.com/swsim/swsimv135.asmx";
const DEFAULT_NAMESPACE: &str = "http://stamps.com/xml/namespace/2015/05/swsim/swsimv135";

/// Client configuration, consumed by the dispatcher and the transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub namespace: String,
    pub namespace_identifier: String,
    pub open_timeout: Duration,
    pub read_timeout: Duration,
    pub log_messages: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            namespace_identifier: "tns".to_string(),
            open_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            log_messages: false,
        }
    }
}

/// Main client for the postage service.
///
/// One outbound request per operation call; no retries, no backoff. The only
/// state shared between calls is the cached authenticator token.
pub struct SwsimClient {
    config: ClientConfig,
    transport: Arc<dyn SoapTransport>,
    auth: AuthManager,
}

impl SwsimClient {
    /// Create a client in token mode with default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client in token mode with custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(credentials, config, transport))
    }

    /// Create a client over an explicit transport collaborator.
    pub fn with_transport(
        credentials: Credentials,
        config: ClientConfig,
        transport: Arc<dyn SoapTransport>,
    ) -> Self {
        Self {
            config,
            transport,
            auth: AuthManager::new(credentials, AuthMode::Token),
        }
    }

    /// Switch to raw-credential mode: no token is ever fetched and every
    /// outbound payload carries an inline Credentials structure.
    pub fn raw_credentials_mode(mut self) -> Self {
        self.auth = AuthManager::new(self.auth.credentials().clone(), AuthMode::RawCredentials);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Dispatch one domain call: inject credentials when the client runs in
    /// raw-credential mode, then hand the payload to the transport.
    pub(crate) async fn dispatch(&self, operation: Operation, mut payload: WireStruct) -> Result<SwsResponse> {
        if self.auth.is_raw_credentials() {
            payload.prepend("Credentials", self.auth.credentials().to_wire());
        }
        self.send(operation, payload).await
    }

    /// Send without authentication injection. Used for the token exchange
    /// itself, which carries credentials in its own declared field.
    pub(crate) async fn send(&self, operation: Operation, payload: WireStruct) -> Result<SwsResponse> {
        let spec = CallSpec::new(operation, &self.config.namespace);
        let raw = self.transport.call(&spec, &payload).await?;
        SwsResponse::normalize(raw)
    }
}
