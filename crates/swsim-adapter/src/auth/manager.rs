/*
[INPUT]:  Integration credentials and the configured authentication mode
[OUTPUT]: Cached authenticator token, or nothing in raw-credential mode
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When the token exchange or caching rules change
*/

use serde_json::Value;
use tokio::sync::Mutex;

use crate::http::{Operation, Result, SwsimClient, SwsimError};
use crate::types::Credentials;
use crate::wire::{ToWire, WireStruct};

/// Exactly one of the two modes is active for a client's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Fetch an authenticator token once and reuse it on every call.
    Token,
    /// Send the raw credentials inline with every call; never fetch a token.
    RawCredentials,
}

/// Owns the credentials and the memoized authenticator token.
///
/// The cache is a `tokio::sync::Mutex` held across the fill, so concurrent
/// first callers on a shared client serialize onto a single upstream
/// authentication call.
#[derive(Debug)]
pub struct AuthManager {
    credentials: Credentials,
    mode: AuthMode,
    token: Mutex<Option<String>>,
}

impl AuthManager {
    pub fn new(credentials: Credentials, mode: AuthMode) -> Self {
        Self {
            credentials,
            mode,
            token: Mutex::new(None),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn is_raw_credentials(&self) -> bool {
        self.mode == AuthMode::RawCredentials
    }

    /// The memoized token, if one has been fetched.
    pub async fn cached_token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    pub(crate) fn cache(&self) -> &Mutex<Option<String>> {
        &self.token
    }
}

impl SwsimClient {
    /// The authenticator token for this client.
    ///
    /// Raw-credential mode returns `None` without issuing any call. Token
    /// mode returns the cached token, or performs the one AuthenticateUser
    /// exchange of this client's lifetime and caches the result.
    pub async fn authenticator_token(&self) -> Result<Option<String>> {
        if self.auth().is_raw_credentials() {
            return Ok(None);
        }

        let mut cached = self.auth().cache().lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(Some(token.clone()));
        }

        let token = self.fetch_authenticator().await?;
        *cached = Some(token.clone());
        Ok(Some(token))
    }

    /// Issue the AuthenticateUser exchange. Fatal when the response carries
    /// no authenticator; the first upstream error message is surfaced.
    async fn fetch_authenticator(&self) -> Result<String> {
        let mut payload = WireStruct::new();
        payload.field("Credentials", self.auth().credentials().to_wire());

        let response = self.send(Operation::AuthenticateUser, payload).await?;
        response
            .get_path(&["AuthenticateUserResponse", "Authenticator"])
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| SwsimError::Authentication {
                message: response
                    .errors()
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "authentication response carried no authenticator".to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_starts_empty() {
        let manager = AuthManager::new(Credentials::new("iid", "user", "pass"), AuthMode::Token);
        assert_eq!(manager.mode(), AuthMode::Token);
        assert!(!manager.is_raw_credentials());
        assert!(tokio_test::block_on(manager.cached_token()).is_none());
    }

    #[test]
    fn test_raw_credentials_mode_flag() {
        let manager = AuthManager::new(
            Credentials::new("iid", "user", "pass"),
            AuthMode::RawCredentials,
        );
        assert!(manager.is_raw_credentials());
    }
}
