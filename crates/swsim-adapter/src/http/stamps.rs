/*
[INPUT]:  Label, manifest and tracking request parameters
[OUTPUT]: Issued indicia, manifests and tracking data
[POS]:    HTTP layer - label lifecycle operations
[UPDATE]: When label operations gain parameters or defaults change
*/

use serde_json::Value;

use crate::types::{
    Address, CancelRequest, IndiciumRequest, ManifestRequest, ManifestType, ReprintRequest,
    TrackRequest,
};
use crate::wire::{ToWire, WireStruct};

use super::client::SwsimClient;
use super::error::Result;
use super::response::{SwsResponse, flatten};
use super::transport::Operation;

impl SwsimClient {
    /// Create a postage label.
    ///
    /// The rate embedded in the request should be one previously returned by
    /// GetRates, echoed back with the service selection applied.
    pub async fn create_indicium(&self, indicium: &IndiciumRequest) -> Result<SwsResponse> {
        let mut payload = indicium.to_wire();
        if let Some(token) = self.authenticator_token().await? {
            payload.prepend("Authenticator", token);
        }
        self.dispatch(Operation::CreateIndicium, payload).await
    }

    /// Create a postage label, filling unset from-address fields from an
    /// explicit return address before mapping.
    pub async fn create_indicium_with_return_address(
        &self,
        indicium: &IndiciumRequest,
        return_address: &Address,
    ) -> Result<SwsResponse> {
        self.create_indicium(&indicium.with_return_address(return_address))
            .await
    }

    /// Return data for a previously issued indicium so the label can be
    /// printed again, optionally with different image or placement settings.
    /// Only one of the request's identifiers should locate the original.
    pub async fn reprint_indicium(&self, reprint: &ReprintRequest) -> Result<SwsResponse> {
        let mut inner = reprint.to_wire();
        if let Some(token) = self.authenticator_token().await? {
            inner.prepend("Authenticator", token);
        }
        let mut payload = WireStruct::new();
        payload.field("indiciumRequest", inner);
        self.dispatch(Operation::ReprintIndicium, payload).await
    }

    /// Refund postage and void the label.
    pub async fn cancel_indicium(&self, cancel: &CancelRequest) -> Result<SwsResponse> {
        let mut payload = cancel.to_wire();
        if let Some(token) = self.authenticator_token().await? {
            payload.prepend("Authenticator", token);
        }
        self.dispatch(Operation::CancelIndicium, payload).await
    }

    /// Tracking events for a previously issued label.
    pub async fn track_shipment(&self, stamps_transaction_id: &str) -> Result<SwsResponse> {
        let request = TrackRequest {
            stamps_transaction_id: Some(stamps_transaction_id.to_string()),
        };
        let mut payload = request.to_wire();
        if let Some(token) = self.authenticator_token().await? {
            payload.prepend("Authenticator", token);
        }
        self.dispatch(Operation::TrackShipment, payload).await
    }

    /// Generate an end-of-day manifest (SCAN form) for previously created
    /// indicia. `print_instructions` defaults to false and `manifest_type`
    /// to `ScanForm` when unset.
    pub async fn create_manifest(&self, manifest: &ManifestRequest) -> Result<SwsResponse> {
        let mut manifest = manifest.clone();
        manifest.print_instructions.get_or_insert(false);
        manifest.manifest_type.get_or_insert(ManifestType::ScanForm);

        let mut payload = manifest.to_wire();
        if let Some(token) = self.authenticator_token().await? {
            payload.prepend("Authenticator", token);
        }
        self.dispatch(Operation::CreateManifest, payload).await
    }
}

impl SwsResponse {
    /// Manifest URLs from a CreateManifest response, in service order.
    pub fn manifest_urls(&self) -> Vec<String> {
        flatten(self.get_path(&[
            "CreateManifestResponse",
            "EndOfDayManifests",
            "EndOfDayManifest",
        ]))
        .iter()
        .filter_map(|manifest| {
            manifest
                .get("ManifestUrl")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .collect()
    }

    /// Tracking events from a TrackShipment response, flattened in order.
    pub fn tracking_events(&self) -> Vec<Value> {
        flatten(self.get_path(&["TrackShipmentResponse", "TrackingEvents", "TrackingEvent"]))
    }
}
