/*
[INPUT]:  Rating criteria (origin, destination, weight, ship date)
[OUTPUT]: Available service rates for the package
[POS]:    HTTP layer - rating operations
[UPDATE]: When the GetRates contract changes
*/

use serde_json::Value;

use crate::types::{Carrier, RateRequest};
use crate::wire::{ToWire, WireStruct};

use super::client::SwsimClient;
use super::error::Result;
use super::response::{SwsResponse, flatten};
use super::transport::Operation;

impl SwsimClient {
    /// Produce rates for every available USPS service matching the criteria.
    ///
    /// ```no_run
    /// # use swsim_adapter::{Credentials, RateRequest, SwsimClient};
    /// # async fn demo() -> swsim_adapter::Result<()> {
    /// let client = SwsimClient::new(Credentials::new("id", "user", "pass"))?;
    /// let response = client
    ///     .get_rates(&RateRequest {
    ///         from_zip_code: Some("45440".to_string()),
    ///         to_zip_code: Some("45458".to_string()),
    ///         weight_oz: Some("8.0".parse().unwrap()),
    ///         ship_date: "2011-06-01".parse().ok(),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// let rates = response.rates();
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_rates(&self, rate: &RateRequest) -> Result<SwsResponse> {
        self.get_rates_with_carrier(rate, Carrier::Usps).await
    }

    /// Produce rates for an explicit carrier.
    pub async fn get_rates_with_carrier(
        &self,
        rate: &RateRequest,
        carrier: Carrier,
    ) -> Result<SwsResponse> {
        let mut payload = WireStruct::new();
        if let Some(token) = self.authenticator_token().await? {
            payload.field("Authenticator", token);
        }
        payload.field("Rate", rate.to_wire());
        payload.field("Carrier", carrier.as_str());
        self.dispatch(Operation::GetRates, payload).await
    }

    /// The first matching rate, if the service returned any.
    pub async fn get_rate(&self, rate: &RateRequest) -> Result<Option<Value>> {
        Ok(self.get_rates(rate).await?.rates().into_iter().next())
    }
}

impl SwsResponse {
    /// Rate entries from a GetRates response, flattened into a list: absent
    /// becomes empty, a lone un-collected entry becomes a one-element list.
    pub fn rates(&self) -> Vec<Value> {
        flatten(self.get_path(&["GetRatesResponse", "Rates", "Rate"]))
    }
}
