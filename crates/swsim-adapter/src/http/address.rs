/*
[INPUT]:  A candidate postal address
[OUTPUT]: The standardized address with cleanse hashes
[POS]:    HTTP layer - address operations
[UPDATE]: When the CleanseAddress contract changes
*/

use crate::types::Address;
use crate::wire::{ToWire, WireStruct};

use super::client::SwsimClient;
use super::error::Result;
use super::response::SwsResponse;
use super::transport::Operation;

impl SwsimClient {
    /// Standardize a ship-to address. The returned cleanse hash must be
    /// echoed on label creation for the address to be accepted as verified.
    pub async fn cleanse_address(&self, address: &Address) -> Result<SwsResponse> {
        let mut payload = WireStruct::new();
        if let Some(token) = self.authenticator_token().await? {
            payload.field("Authenticator", token);
        }
        payload.field("Address", address.to_wire());
        self.dispatch(Operation::CleanseAddress, payload).await
    }
}
