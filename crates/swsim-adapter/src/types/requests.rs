/*
[INPUT]:  SWSIM operation parameter schemas
[OUTPUT]: Typed Rust request structs, one per remote operation
[POS]:    Data layer - request shapes consumed by the mapping engine
[UPDATE]: When operations gain parameters or new operations are added
*/

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{ImageType, ManifestType, NonDeliveryOption, PackageType, PaperSize};
use super::models::{AddOns, Address, Customs};

/// Rating criteria for a single package. Also embedded verbatim into label
/// creation, where the service expects the rate entry it previously returned
/// echoed back; the echo-only fields (deliver days, zone, restrictions and the
/// like) exist for that round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateRequest {
    pub from_zip_code: Option<String>,
    pub from: Option<Address>,
    pub to_zip_code: Option<String>,
    pub to_country: Option<String>,
    pub to: Option<Address>,
    pub amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub service_type: Option<String>,
    pub print_layout: Option<String>,
    pub deliver_days: Option<String>,
    pub error: Option<String>,
    pub weight_lb: Option<Decimal>,
    pub weight_oz: Option<Decimal>,
    pub package_type: Option<PackageType>,
    pub requires_all_of: Option<String>,
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    pub ship_date: Option<NaiveDate>,
    pub insured_value: Option<Decimal>,
    pub registered_value: Option<Decimal>,
    pub cod_value: Option<Decimal>,
    pub declared_value: Option<Decimal>,
    pub non_machinable: Option<bool>,
    pub rectangular: Option<bool>,
    pub prohibitions: Option<String>,
    pub restrictions: Option<String>,
    pub observations: Option<String>,
    pub regulations: Option<String>,
    pub gem_notes: Option<String>,
    pub max_dimensions: Option<String>,
    pub dim_weighting: Option<String>,
    pub add_ons: Option<AddOns>,
    pub effective_weight_in_ounces: Option<Decimal>,
    pub is_intra_bmc: Option<bool>,
    pub zone: Option<i32>,
    pub rate_category: Option<i32>,
    pub to_state: Option<String>,
    pub cubic_pricing: Option<bool>,
}

/// Parameters for CreateIndicium: addresses, the selected rate, optional
/// customs declaration, and print/notification options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndiciumRequest {
    pub integrator_tx_id: Option<String>,
    pub tracking_number: Option<String>,
    pub rate: Option<RateRequest>,
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub customer_id: Option<String>,
    pub customs: Option<Customs>,
    pub sample_only: Option<bool>,
    pub image_type: Option<ImageType>,
    pub label_resolution: Option<String>,
    pub memo: Option<String>,
    pub recipient_email: Option<String>,
    pub delivery_notification: Option<bool>,
    pub notification_cc: Option<bool>,
    pub notification_from_company: Option<bool>,
    pub notification_company_in_subject: Option<bool>,
    pub rotation_degrees: Option<i32>,
    pub print_memo: Option<bool>,
    pub non_delivery_option: Option<NonDeliveryOption>,
    pub paper_size: Option<PaperSize>,
}

impl IndiciumRequest {
    /// Thread an explicit return address into this request: unset fields of
    /// `from` are filled from `return_address`, set fields win.
    pub fn with_return_address(&self, return_address: &Address) -> IndiciumRequest {
        let mut merged = self.clone();
        merged.from = Some(match &self.from {
            Some(from) => from.with_defaults(return_address),
            None => return_address.clone(),
        });
        merged
    }
}

/// Parameters for CancelIndicium. The label is identified by the stamps
/// transaction id or by tracking numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub transaction_id: Option<String>,
    pub tracking_numbers: Vec<String>,
}

/// Parameters for TrackShipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRequest {
    pub stamps_transaction_id: Option<String>,
}

/// Parameters for CreateManifest. Prior labels are referenced by stamps tx
/// ids or tracking numbers; alternatively a ship date selects every label
/// printed that day that is not already on a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestRequest {
    pub integrator_tx_id: Option<String>,
    pub stamps_tx_ids: Vec<String>,
    pub tracking_numbers: Vec<String>,
    pub ship_date: Option<NaiveDate>,
    pub from_address: Option<Address>,
    pub image_type: Option<ImageType>,
    pub print_instructions: Option<bool>,
    pub manifest_type: Option<ManifestType>,
}

/// Parameters for ReprintIndicium. Exactly one of `integrator_tx_id`,
/// `stamps_tx_id` or `tracking_number` should identify the original label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReprintRequest {
    pub integrator_tx_id: Option<String>,
    pub stamps_tx_id: Option<String>,
    pub tracking_number: Option<String>,
    pub image_type: Option<ImageType>,
    pub rotation_degrees: Option<i32>,
    pub paper_size: Option<PaperSize>,
    pub start_row: Option<i32>,
    pub start_column: Option<i32>,
}

/// Parameters for PurchasePostage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchasePostageRequest {
    pub transaction_id: Option<String>,
    pub amount: Option<Decimal>,
    pub control_total: Option<Decimal>,
}

/// Parameters for CarrierPickup scheduling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarrierPickupRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub zip_four: Option<String>,
    pub phone: Option<String>,
    pub phone_ext: Option<String>,
    pub express_mail_count: Option<u32>,
    pub priority_mail_count: Option<u32>,
    pub international_mail_count: Option<u32>,
    pub other_mail_count: Option<u32>,
    pub total_weight: Option<Decimal>,
    pub location: Option<String>,
    pub special_instruction: Option<String>,
}
