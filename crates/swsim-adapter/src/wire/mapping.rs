/*
[INPUT]:  Populated domain request types
[OUTPUT]: Ordered wire structures matching the remote field names
[POS]:    Wire layer - per-type field mapping tables
[UPDATE]: When the remote schema renames, reorders or adds fields
*/

use crate::types::{
    AddOnV9, AddOnV17, AddOns, Address, CancelRequest, CarrierPickupRequest, Credentials, Customs,
    CustomsLine, IndiciumRequest, ManifestRequest, PurchasePostageRequest, RateRequest,
    ReprintRequest, TrackRequest,
};

use super::value::{WireStruct, WireValue};

/// Conversion from a domain type into its wire representation.
///
/// Each implementation is that type's field-descriptor table: wire names are
/// fixed literals, emitted in declared order, with absent sources omitted.
/// Composites recurse; collections map elements independently in input order.
pub trait ToWire {
    fn to_wire(&self) -> WireStruct;
}

/// Wrap each id in the `{guid}` single-field shape the manifest and reprint
/// schemas declare for transaction-id collections.
fn guid_list(ids: &[String]) -> WireValue {
    WireValue::List(
        ids.iter()
            .map(|id| {
                let mut wrapper = WireStruct::new();
                wrapper.field("guid", id);
                WireValue::Struct(wrapper)
            })
            .collect(),
    )
}

/// Wrap each tracking number in the `{string}` single-field shape.
fn string_list(values: &[String]) -> WireValue {
    WireValue::List(
        values
            .iter()
            .map(|value| {
                let mut wrapper = WireStruct::new();
                wrapper.field("string", value);
                WireValue::Struct(wrapper)
            })
            .collect(),
    )
}

fn text_list(values: &[String]) -> WireValue {
    WireValue::List(values.iter().map(WireValue::from).collect())
}

impl ToWire for Credentials {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field("IntegrationID", &self.integration_id);
        w.field("Username", &self.username);
        w.field("Password", &self.password);
        w
    }
}

impl ToWire for Address {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("FullName", self.full_name.as_ref());
        w.field_opt("NamePrefix", self.name_prefix.as_ref());
        w.field_opt("FirstName", self.first_name.as_ref());
        w.field_opt("MiddleName", self.middle_name.as_ref());
        w.field_opt("LastName", self.last_name.as_ref());
        w.field_opt("NameSuffix", self.name_suffix.as_ref());
        w.field_opt("Title", self.title.as_ref());
        w.field_opt("Department", self.department.as_ref());
        w.field_opt("Company", self.company.as_ref());
        w.field_opt("Address1", self.address1.as_ref());
        w.field_opt("Address2", self.address2.as_ref());
        w.field_opt("City", self.city.as_ref());
        w.field_opt("State", self.state.as_ref());
        w.field_opt("ZIPCode", self.zip_code.as_ref());
        w.field_opt("ZIPCodeAddOn", self.zip_code_add_on.as_ref());
        w.field_opt("DPB", self.dpb.as_ref());
        w.field_opt("CheckDigit", self.check_digit.as_ref());
        w.field_opt("Province", self.province.as_ref());
        w.field_opt("PostalCode", self.postal_code.as_ref());
        w.field_opt("Country", self.country.as_ref());
        w.field_opt("Urbanization", self.urbanization.as_ref());
        w.field_opt("PhoneNumber", self.phone_number.as_ref());
        w.field_opt("Extension", self.extension.as_ref());
        w.field_opt("CleanseHash", self.cleanse_hash.as_ref());
        w.field_opt("OverrideHash", self.override_hash.as_ref());
        w
    }
}

impl ToWire for RateRequest {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("FromZIPCode", self.from_zip_code.as_ref());
        w.field_opt("From", self.from.as_ref().map(ToWire::to_wire));
        w.field_opt("ToZIPCode", self.to_zip_code.as_ref());
        w.field_opt("ToCountry", self.to_country.as_ref());
        w.field_opt("To", self.to.as_ref().map(ToWire::to_wire));
        w.field_opt("Amount", self.amount);
        w.field_opt("MaxAmount", self.max_amount);
        w.field_opt("ServiceType", self.service_type.as_ref());
        w.field_opt("PrintLayout", self.print_layout.as_ref());
        w.field_opt("DeliverDays", self.deliver_days.as_ref());
        w.field_opt("Error", self.error.as_ref());
        w.field_opt("WeightLb", self.weight_lb);
        w.field_opt("WeightOz", self.weight_oz);
        w.field_opt("PackageType", self.package_type.map(|p| p.as_str()));
        w.field_opt("RequiresAllOf", self.requires_all_of.as_ref());
        w.field_opt("Length", self.length);
        w.field_opt("Width", self.width);
        w.field_opt("Height", self.height);
        w.field_opt("ShipDate", self.ship_date);
        w.field_opt("InsuredValue", self.insured_value);
        w.field_opt("RegisteredValue", self.registered_value);
        w.field_opt("CODValue", self.cod_value);
        w.field_opt("DeclaredValue", self.declared_value);
        w.field_opt("NonMachinable", self.non_machinable);
        w.field_opt("RectangularShaped", self.rectangular);
        w.field_opt("Prohibitions", self.prohibitions.as_ref());
        w.field_opt("Restrictions", self.restrictions.as_ref());
        w.field_opt("Observations", self.observations.as_ref());
        w.field_opt("Regulations", self.regulations.as_ref());
        w.field_opt("GEMNotes", self.gem_notes.as_ref());
        w.field_opt("MaxDimensions", self.max_dimensions.as_ref());
        w.field_opt("DimWeighting", self.dim_weighting.as_ref());
        w.field_opt("AddOns", self.add_ons.as_ref().map(ToWire::to_wire));
        w.field_opt("EffectiveWeightInOunces", self.effective_weight_in_ounces);
        w.field_opt("IsIntraBMC", self.is_intra_bmc);
        w.field_opt("Zone", self.zone);
        w.field_opt("RateCategory", self.rate_category);
        w.field_opt("ToState", self.to_state.as_ref());
        w.field_opt("CubicPricing", self.cubic_pricing);
        w
    }
}

impl ToWire for AddOns {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        if !self.add_on_v9.is_empty() {
            w.field(
                "AddOnV9",
                WireValue::List(
                    self.add_on_v9
                        .iter()
                        .map(|a| WireValue::Struct(a.to_wire()))
                        .collect(),
                ),
            );
        }
        if !self.add_on_v17.is_empty() {
            w.field(
                "AddOnV17",
                WireValue::List(
                    self.add_on_v17
                        .iter()
                        .map(|a| WireValue::Struct(a.to_wire()))
                        .collect(),
                ),
            );
        }
        w
    }
}

impl ToWire for AddOnV9 {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("Amount", self.amount);
        w.field_opt("AddOnType", self.add_on_type.as_ref());
        if !self.prohibited_with_any_of.is_empty() {
            w.field("ProhibitedWithAnyOf", text_list(&self.prohibited_with_any_of));
        }
        w.field_opt("MissingData", self.missing_data.as_ref());
        if !self.requires_all_of.is_empty() {
            w.field("RequiresAllOf", text_list(&self.requires_all_of));
        }
        w
    }
}

impl ToWire for AddOnV17 {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("Amount", self.amount);
        w.field_opt("AddOnType", self.add_on_type.as_ref());
        if !self.prohibited_with_any_of.is_empty() {
            w.field("ProhibitedWithAnyOf", text_list(&self.prohibited_with_any_of));
        }
        w.field_opt("MissingData", self.missing_data.as_ref());
        if !self.requires_all_of.is_empty() {
            w.field("RequiresAllOf", text_list(&self.requires_all_of));
        }
        w
    }
}

impl ToWire for Customs {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("ContentType", self.content_type.map(|c| c.as_str()));
        w.field_opt("Comments", self.comments.as_ref());
        w.field_opt("LicenseNumber", self.license_number.as_ref());
        w.field_opt("CertificateNumber", self.certificate_number.as_ref());
        w.field_opt("InvoiceNumber", self.invoice_number.as_ref());
        w.field_opt("OtherDescribe", self.other_describe.as_ref());
        if !self.customs_lines.is_empty() {
            let mut lines = WireStruct::new();
            lines.field(
                "CustomsLine",
                WireValue::List(
                    self.customs_lines
                        .iter()
                        .map(|line| WireValue::Struct(line.to_wire()))
                        .collect(),
                ),
            );
            w.field("CustomsLines", lines);
        }
        w.field_opt(
            "SendersCustomsReference",
            self.senders_customs_reference.as_ref(),
        );
        w
    }
}

impl ToWire for CustomsLine {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("Description", self.description.as_ref());
        w.field_opt("Quantity", self.quantity);
        w.field_opt("Value", self.value);
        w.field_opt("WeightLb", self.weight_lb);
        w.field_opt("WeightOz", self.weight_oz);
        w.field_opt("HSTariffNumber", self.hs_tariff_number.as_ref());
        w.field_opt("CountryOfOrigin", self.country_of_origin.as_ref());
        w
    }
}

impl ToWire for IndiciumRequest {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("IntegratorTxID", self.integrator_tx_id.as_ref());
        w.field_opt("TrackingNumber", self.tracking_number.as_ref());
        w.field_opt("Rate", self.rate.as_ref().map(ToWire::to_wire));
        w.field_opt("From", self.from.as_ref().map(ToWire::to_wire));
        w.field_opt("To", self.to.as_ref().map(ToWire::to_wire));
        w.field_opt("CustomerID", self.customer_id.as_ref());
        w.field_opt("Customs", self.customs.as_ref().map(ToWire::to_wire));
        w.field_opt("SampleOnly", self.sample_only);
        w.field_opt("ImageType", self.image_type.map(|i| i.as_str()));
        w.field_opt("EltronPrinterDPIType", self.label_resolution.as_ref());
        w.field_opt("memo", self.memo.as_ref());
        w.field_opt("recipient_email", self.recipient_email.as_ref());
        w.field_opt("deliveryNotification", self.delivery_notification);
        w.field_opt("shipmentNotificationCC", self.notification_cc);
        w.field_opt(
            "shipmentNotificationFromCompany",
            self.notification_from_company,
        );
        w.field_opt(
            "shipmentNotificationCompanyInSubject",
            self.notification_company_in_subject,
        );
        w.field_opt("rotationDegrees", self.rotation_degrees);
        w.field_opt("printMemo", self.print_memo);
        w.field_opt("nonDeliveryOption", self.non_delivery_option.map(|n| n.as_str()));
        w.field_opt("PaperSize", self.paper_size.map(|p| p.as_str()));
        w
    }
}

impl ToWire for CancelRequest {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("StampsTxID", self.transaction_id.as_ref());
        if !self.tracking_numbers.is_empty() {
            w.field("TrackingNumbers", string_list(&self.tracking_numbers));
        }
        w
    }
}

impl ToWire for TrackRequest {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("StampsTxID", self.stamps_transaction_id.as_ref());
        w
    }
}

impl ToWire for ManifestRequest {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("IntegratorTxID", self.integrator_tx_id.as_ref());
        if !self.stamps_tx_ids.is_empty() {
            w.field("StampsTxIds", guid_list(&self.stamps_tx_ids));
        }
        if !self.tracking_numbers.is_empty() {
            w.field("TrackingNumbers", string_list(&self.tracking_numbers));
        }
        w.field_opt("ShipDate", self.ship_date);
        w.field_opt("FromAddress", self.from_address.as_ref().map(ToWire::to_wire));
        w.field_opt("ImageType", self.image_type.map(|i| i.as_str()));
        w.field_opt("PrintInstructions", self.print_instructions);
        w.field_opt("ManifestType", self.manifest_type.map(|m| m.as_str()));
        w
    }
}

impl ToWire for ReprintRequest {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("IntegratorTxID", self.integrator_tx_id.as_ref());
        if let Some(tx_id) = self.stamps_tx_id.as_ref() {
            let mut wrapper = WireStruct::new();
            wrapper.field("guid", tx_id);
            w.field("StampsTxId", wrapper);
        }
        w.field_opt("TrackingNumber", self.tracking_number.as_ref());
        w.field_opt("ImageType", self.image_type.map(|i| i.as_str()));
        w.field_opt("RotationDegrees", self.rotation_degrees);
        w.field_opt("PaperSize", self.paper_size.map(|p| p.as_str()));
        w.field_opt("StartRow", self.start_row);
        w.field_opt("StartColumn", self.start_column);
        w
    }
}

impl ToWire for PurchasePostageRequest {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("IntegratorTxID", self.transaction_id.as_ref());
        w.field_opt("PurchaseAmount", self.amount);
        w.field_opt("ControlTotal", self.control_total);
        w
    }
}

impl ToWire for CarrierPickupRequest {
    fn to_wire(&self) -> WireStruct {
        let mut w = WireStruct::new();
        w.field_opt("FirstName", self.first_name.as_ref());
        w.field_opt("LastName", self.last_name.as_ref());
        w.field_opt("Company", self.company.as_ref());
        w.field_opt("Address", self.address.as_ref());
        // SuiteOrApt is declared with an empty-string default in the schema.
        w.field("SuiteOrApt", self.suite.clone().unwrap_or_default());
        w.field_opt("City", self.city.as_ref());
        w.field_opt("State", self.state.as_ref());
        w.field_opt("ZIP", self.zip.as_ref());
        w.field_opt("ZIP4", self.zip_four.as_ref());
        w.field_opt("PhoneNumber", self.phone.as_ref());
        w.field_opt("PhoneExt", self.phone_ext.as_ref());
        w.field_opt("NumberOfExpressMailPieces", self.express_mail_count);
        w.field_opt("NumberOfPriorityMailPieces", self.priority_mail_count);
        w.field_opt("NumberOfInternationalPieces", self.international_mail_count);
        w.field_opt("NumberOfOtherPieces", self.other_mail_count);
        w.field_opt("TotalWeightOfPackagesLbs", self.total_weight);
        w.field_opt("PackageLocation", self.location.as_ref());
        w.field_opt("SpecialInstruction", self.special_instruction.as_ref());
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_credentials_wire_fields() {
        let creds = Credentials::new("iid", "user", "pass");
        let w = creds.to_wire();
        assert_eq!(w.names(), vec!["IntegrationID", "Username", "Password"]);
        assert_eq!(w.get("Username").unwrap().render().as_deref(), Some("user"));
    }

    #[test]
    fn test_rate_omits_unset_fields() {
        let rate = RateRequest {
            from_zip_code: Some("45440".to_string()),
            to_zip_code: Some("45458".to_string()),
            weight_oz: Some(dec("8.0")),
            ..Default::default()
        };

        let w = rate.to_wire();
        assert_eq!(w.names(), vec!["FromZIPCode", "ToZIPCode", "WeightOz"]);
        assert_eq!(w.get("WeightOz").unwrap().render().as_deref(), Some("8.0"));
        assert!(w.get("ServiceType").is_none());
    }

    #[test]
    fn test_customs_lines_preserve_input_order() {
        let customs = Customs {
            customs_lines: vec![
                CustomsLine {
                    description: Some("first".to_string()),
                    ..Default::default()
                },
                CustomsLine {
                    description: Some("second".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let w = customs.to_wire();
        let lines = w
            .get("CustomsLines")
            .and_then(WireValue::as_struct)
            .and_then(|s| s.get("CustomsLine"))
            .and_then(WireValue::as_list)
            .unwrap();

        let descriptions: Vec<_> = lines
            .iter()
            .map(|line| {
                line.as_struct()
                    .and_then(|s| s.get("Description"))
                    .and_then(WireValue::render)
                    .unwrap()
            })
            .collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }

    #[test]
    fn test_manifest_wraps_ids_in_declared_shapes() {
        let manifest = ManifestRequest {
            stamps_tx_ids: vec!["tx-1".to_string(), "tx-2".to_string()],
            tracking_numbers: vec!["9400100000000000000000".to_string()],
            ..Default::default()
        };

        let w = manifest.to_wire();
        let ids = w.get("StampsTxIds").and_then(WireValue::as_list).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(
            ids[0]
                .as_struct()
                .and_then(|s| s.get("guid"))
                .and_then(WireValue::render)
                .as_deref(),
            Some("tx-1")
        );

        let numbers = w
            .get("TrackingNumbers")
            .and_then(WireValue::as_list)
            .unwrap();
        assert_eq!(
            numbers[0]
                .as_struct()
                .and_then(|s| s.get("string"))
                .and_then(WireValue::render)
                .as_deref(),
            Some("9400100000000000000000")
        );
    }

    #[test]
    fn test_reprint_wraps_stamps_tx_id() {
        let reprint = ReprintRequest {
            stamps_tx_id: Some("tx-9".to_string()),
            ..Default::default()
        };

        let w = reprint.to_wire();
        let wrapped = w.get("StampsTxId").and_then(WireValue::as_struct).unwrap();
        assert_eq!(
            wrapped.get("guid").and_then(WireValue::render).as_deref(),
            Some("tx-9")
        );
    }

    #[test]
    fn test_add_on_relations_carried_through() {
        let add_ons = AddOns {
            add_on_v17: vec![AddOnV17 {
                add_on_type: Some("US-A-DC".to_string()),
                amount: Some(dec("0.95")),
                requires_all_of: vec!["US-A-REG".to_string()],
                prohibited_with_any_of: vec!["US-A-CM".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let w = add_ons.to_wire();
        let items = w.get("AddOnV17").and_then(WireValue::as_list).unwrap();
        let item = items[0].as_struct().unwrap();
        assert_eq!(
            item.names(),
            vec!["Amount", "AddOnType", "ProhibitedWithAnyOf", "RequiresAllOf"]
        );
    }

    #[test]
    fn test_carrier_pickup_suite_defaults_to_empty() {
        let pickup = CarrierPickupRequest::default();
        let w = pickup.to_wire();
        assert_eq!(w.get("SuiteOrApt").unwrap().render().as_deref(), Some(""));
    }
}
