/*
[INPUT]:  Populated domain request types
[OUTPUT]: Test results for the wire mapping tables
[POS]:    Integration tests - mapping engine
[UPDATE]: When mapping tables or wire shapes change
*/

use rstest::rstest;
use rust_decimal::Decimal;
use swsim_adapter::http::soap;
use swsim_adapter::{
    AddOnV17, AddOns, Address, Carrier, Customs, CustomsLine, ImageType, IndiciumRequest,
    RateRequest, ToWire, WireStruct, WireValue,
};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn full_address() -> Address {
    Address {
        full_name: Some("Jordan Shipper".to_string()),
        name_prefix: Some("Mx".to_string()),
        first_name: Some("Jordan".to_string()),
        middle_name: Some("Q".to_string()),
        last_name: Some("Shipper".to_string()),
        name_suffix: Some("Jr".to_string()),
        title: Some("Ops".to_string()),
        department: Some("Fulfillment".to_string()),
        company: Some("Acme".to_string()),
        address1: Some("123 Main St".to_string()),
        address2: Some("Suite 4".to_string()),
        city: Some("Dayton".to_string()),
        state: Some("OH".to_string()),
        zip_code: Some("45440".to_string()),
        zip_code_add_on: Some("0001".to_string()),
        dpb: Some("23".to_string()),
        check_digit: Some("7".to_string()),
        province: Some("ON".to_string()),
        postal_code: Some("K1A 0B1".to_string()),
        country: Some("US".to_string()),
        urbanization: Some("URB".to_string()),
        phone_number: Some("9375550100".to_string()),
        extension: Some("12".to_string()),
        cleanse_hash: Some("hash-a".to_string()),
        override_hash: Some("hash-b".to_string()),
    }
}

#[test]
fn test_full_address_emits_every_declared_field_in_order() {
    let wire = full_address().to_wire();

    assert_eq!(
        wire.names(),
        vec![
            "FullName",
            "NamePrefix",
            "FirstName",
            "MiddleName",
            "LastName",
            "NameSuffix",
            "Title",
            "Department",
            "Company",
            "Address1",
            "Address2",
            "City",
            "State",
            "ZIPCode",
            "ZIPCodeAddOn",
            "DPB",
            "CheckDigit",
            "Province",
            "PostalCode",
            "Country",
            "Urbanization",
            "PhoneNumber",
            "Extension",
            "CleanseHash",
            "OverrideHash",
        ]
    );
    assert_eq!(wire.get("ZIPCode").unwrap().render().as_deref(), Some("45440"));
}

#[test]
fn test_sparse_address_omits_unset_fields() {
    let address = Address {
        city: Some("Dayton".to_string()),
        ..Default::default()
    };
    let wire = address.to_wire();
    assert_eq!(wire.names(), vec!["City"]);
}

#[test]
fn test_rate_request_spec_example() {
    let rate = RateRequest {
        from_zip_code: Some("45440".to_string()),
        to_zip_code: Some("45458".to_string()),
        weight_oz: Some(dec("8.0")),
        ship_date: "2011-06-01".parse().ok(),
        ..Default::default()
    };

    let wire = rate.to_wire();
    assert_eq!(
        wire.names(),
        vec!["FromZIPCode", "ToZIPCode", "WeightOz", "ShipDate"]
    );
    assert_eq!(wire.get("FromZIPCode").unwrap().render().as_deref(), Some("45440"));
    assert_eq!(wire.get("ToZIPCode").unwrap().render().as_deref(), Some("45458"));
    assert_eq!(wire.get("WeightOz").unwrap().render().as_deref(), Some("8.0"));
    assert_eq!(wire.get("ShipDate").unwrap().render().as_deref(), Some("2011-06-01"));
}

#[rstest]
#[case(Carrier::Usps, "USPS")]
#[case(Carrier::Ups, "UPS")]
#[case(Carrier::Fedex, "FedEx")]
#[case(Carrier::Dhl, "DHL")]
fn test_carrier_wire_literals(#[case] carrier: Carrier, #[case] expected: &str) {
    assert_eq!(carrier.as_str(), expected);
}

#[test]
fn test_indicium_resolves_nested_composites_eagerly() {
    let indicium = IndiciumRequest {
        integrator_tx_id: Some("tx-42".to_string()),
        rate: Some(RateRequest {
            from_zip_code: Some("45440".to_string()),
            to_zip_code: Some("45458".to_string()),
            weight_oz: Some(dec("8.0")),
            add_ons: Some(AddOns {
                add_on_v17: vec![AddOnV17 {
                    add_on_type: Some("US-A-DC".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        }),
        from: Some(full_address()),
        to: Some(Address {
            full_name: Some("Receiver".to_string()),
            zip_code: Some("45458".to_string()),
            ..Default::default()
        }),
        customs: Some(Customs {
            customs_lines: vec![
                CustomsLine {
                    description: Some("alpha".to_string()),
                    quantity: Some(2),
                    value: Some(dec("10.00")),
                    ..Default::default()
                },
                CustomsLine {
                    description: Some("beta".to_string()),
                    quantity: Some(1),
                    value: Some(dec("5.00")),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }),
        image_type: Some(ImageType::Png),
        ..Default::default()
    };

    let wire = indicium.to_wire();
    assert_eq!(
        wire.names(),
        vec!["IntegratorTxID", "Rate", "From", "To", "Customs", "ImageType"]
    );

    // Nested composites are concrete ordered structures, not deferred values.
    let rate = wire.get("Rate").and_then(WireValue::as_struct).unwrap();
    assert_eq!(rate.get("FromZIPCode").unwrap().render().as_deref(), Some("45440"));
    let add_ons = rate.get("AddOns").and_then(WireValue::as_struct).unwrap();
    assert!(add_ons.get("AddOnV17").and_then(WireValue::as_list).is_some());

    let lines = wire
        .get("Customs")
        .and_then(WireValue::as_struct)
        .and_then(|c| c.get("CustomsLines"))
        .and_then(WireValue::as_struct)
        .and_then(|c| c.get("CustomsLine"))
        .and_then(WireValue::as_list)
        .unwrap();
    let order: Vec<_> = lines
        .iter()
        .map(|line| {
            line.as_struct()
                .and_then(|l| l.get("Description"))
                .and_then(WireValue::render)
                .unwrap()
        })
        .collect();
    assert_eq!(order, vec!["alpha", "beta"]);
}

#[test]
fn test_serializing_resolved_structure_twice_is_identical() {
    let indicium = IndiciumRequest {
        rate: Some(RateRequest {
            from_zip_code: Some("45440".to_string()),
            weight_oz: Some(dec("8.0")),
            ..Default::default()
        }),
        from: Some(full_address()),
        ..Default::default()
    };

    let wire = indicium.to_wire();
    let first = soap::build_envelope("urn:swsim", "tns", "CreateIndicium", &wire).unwrap();
    let second = soap::build_envelope("urn:swsim", "tns", "CreateIndicium", &wire).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_with_return_address_merges_before_mapping() {
    let request = IndiciumRequest {
        from: Some(Address {
            full_name: Some("Jordan Shipper".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let return_address = Address {
        full_name: Some("Warehouse".to_string()),
        address1: Some("100 Depot Way".to_string()),
        city: Some("Cincinnati".to_string()),
        state: Some("OH".to_string()),
        zip_code: Some("45202".to_string()),
        ..Default::default()
    };

    let wire = request.with_return_address(&return_address).to_wire();
    let from = wire.get("From").and_then(WireValue::as_struct).unwrap();
    assert_eq!(
        from.get("FullName").unwrap().render().as_deref(),
        Some("Jordan Shipper")
    );
    assert_eq!(
        from.get("Address1").unwrap().render().as_deref(),
        Some("100 Depot Way")
    );
}

#[test]
fn test_request_without_from_takes_whole_return_address() {
    let request = IndiciumRequest::default();
    let return_address = Address {
        company: Some("Acme".to_string()),
        ..Default::default()
    };

    let merged = request.with_return_address(&return_address);
    assert_eq!(merged.from.unwrap().company.as_deref(), Some("Acme"));
}

#[test]
fn test_wire_struct_prepend_keeps_declared_order() {
    let rate = RateRequest {
        from_zip_code: Some("45440".to_string()),
        to_zip_code: Some("45458".to_string()),
        ..Default::default()
    };

    let mut payload = WireStruct::new();
    payload.field("Rate", rate.to_wire());
    payload.field("Carrier", Carrier::Usps.as_str());
    payload.prepend("Authenticator", "token");

    assert_eq!(payload.names(), vec!["Authenticator", "Rate", "Carrier"]);
}
