/*
[INPUT]:  SWSIM schema definitions
[OUTPUT]: Typed Rust structs shared across request shapes
[POS]:    Data layer - composite types embedded in requests
[UPDATE]: When the remote schema changes or new composites are added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::ContentType;

/// Integration credentials. Immutable per client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub integration_id: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        integration_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            integration_id: integration_id.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Postal address. Every field is optional; the service enforces its own
/// requirements per operation. The cleanse/override hashes come back from
/// CleanseAddress and are echoed on label creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub full_name: Option<String>,
    pub name_prefix: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub name_suffix: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub zip_code_add_on: Option<String>,
    pub dpb: Option<String>,
    pub check_digit: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub urbanization: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub cleanse_hash: Option<String>,
    pub override_hash: Option<String>,
}

impl Address {
    /// Fill unset fields from `defaults`, field by field. Used to thread an
    /// explicit return address into label creation; set fields always win.
    pub fn with_defaults(&self, defaults: &Address) -> Address {
        macro_rules! pick {
            ($field:ident) => {
                self.$field.clone().or_else(|| defaults.$field.clone())
            };
        }
        Address {
            full_name: pick!(full_name),
            name_prefix: pick!(name_prefix),
            first_name: pick!(first_name),
            middle_name: pick!(middle_name),
            last_name: pick!(last_name),
            name_suffix: pick!(name_suffix),
            title: pick!(title),
            department: pick!(department),
            company: pick!(company),
            address1: pick!(address1),
            address2: pick!(address2),
            city: pick!(city),
            state: pick!(state),
            zip_code: pick!(zip_code),
            zip_code_add_on: pick!(zip_code_add_on),
            dpb: pick!(dpb),
            check_digit: pick!(check_digit),
            province: pick!(province),
            postal_code: pick!(postal_code),
            country: pick!(country),
            urbanization: pick!(urbanization),
            phone_number: pick!(phone_number),
            extension: pick!(extension),
            cleanse_hash: pick!(cleanse_hash),
            override_hash: pick!(override_hash),
        }
    }
}

/// The two independently versioned add-on collections a rate can carry.
/// Relations between add-ons are carried through untouched; this layer never
/// interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddOns {
    pub add_on_v9: Vec<AddOnV9>,
    pub add_on_v17: Vec<AddOnV17>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddOnV9 {
    pub amount: Option<Decimal>,
    pub add_on_type: Option<String>,
    pub prohibited_with_any_of: Vec<String>,
    pub missing_data: Option<String>,
    pub requires_all_of: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddOnV17 {
    pub amount: Option<Decimal>,
    pub add_on_type: Option<String>,
    pub prohibited_with_any_of: Vec<String>,
    pub missing_data: Option<String>,
    pub requires_all_of: Vec<String>,
}

/// Customs declaration for international shipments. Line order is significant
/// and preserved end-to-end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customs {
    pub content_type: Option<ContentType>,
    pub comments: Option<String>,
    pub license_number: Option<String>,
    pub certificate_number: Option<String>,
    pub invoice_number: Option<String>,
    pub other_describe: Option<String>,
    pub customs_lines: Vec<CustomsLine>,
    pub senders_customs_reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomsLine {
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub value: Option<Decimal>,
    pub weight_lb: Option<Decimal>,
    pub weight_oz: Option<Decimal>,
    pub hs_tariff_number: Option<String>,
    pub country_of_origin: Option<String>,
}
