/*
[INPUT]:  Postage purchase and pickup parameters
[OUTPUT]: Purchase, balance and pickup status data
[POS]:    HTTP layer - account operations
[UPDATE]: When account operations gain parameters
*/

use crate::types::{CarrierPickupRequest, PurchasePostageRequest};
use crate::wire::{ToWire, WireStruct};

use super::client::SwsimClient;
use super::error::Result;
use super::response::SwsResponse;
use super::transport::Operation;

impl SwsimClient {
    /// Purchase postage against the account balance.
    pub async fn purchase_postage(&self, purchase: &PurchasePostageRequest) -> Result<SwsResponse> {
        let mut payload = purchase.to_wire();
        if let Some(token) = self.authenticator_token().await? {
            payload.prepend("Authenticator", token);
        }
        self.dispatch(Operation::PurchasePostage, payload).await
    }

    /// Status of a pending postage purchase.
    pub async fn get_purchase_status(&self, transaction_id: &str) -> Result<SwsResponse> {
        self.transaction_status(Operation::GetPurchaseStatus, transaction_id)
            .await
    }

    /// Status of a postage transaction.
    pub async fn get_postage_status(&self, transaction_id: &str) -> Result<SwsResponse> {
        self.transaction_status(Operation::GetPostageStatus, transaction_id)
            .await
    }

    async fn transaction_status(
        &self,
        operation: Operation,
        transaction_id: &str,
    ) -> Result<SwsResponse> {
        let mut payload = WireStruct::new();
        if let Some(token) = self.authenticator_token().await? {
            payload.field("Authenticator", token);
        }
        payload.field("TransactionID", transaction_id);
        self.dispatch(operation, payload).await
    }

    /// Schedule a carrier pickup for packages with postage already applied.
    pub async fn carrier_pickup(&self, pickup: &CarrierPickupRequest) -> Result<SwsResponse> {
        let mut payload = pickup.to_wire();
        if let Some(token) = self.authenticator_token().await? {
            payload.prepend("Authenticator", token);
        }
        self.dispatch(Operation::CarrierPickup, payload).await
    }
}
