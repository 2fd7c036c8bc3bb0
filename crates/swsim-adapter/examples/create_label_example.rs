/*
[INPUT]:  Integration credentials and a sample shipment
[OUTPUT]: A sample-only postage label and its tracking data
[POS]:    Examples - label lifecycle flow
[UPDATE]: When the label creation surface changes
*/

use swsim_adapter::*;

/// Example: cleanse the ship-to address, rate the package, then issue a
/// sample-only label. SampleOnly keeps the account from being charged.
#[tokio::main]
async fn main() {
    println!("=== SWSIM CreateIndicium Example ===\n");

    let credentials = Credentials::new(
        std::env::var("SWSIM_INTEGRATION_ID").unwrap_or_default(),
        std::env::var("SWSIM_USERNAME").unwrap_or_default(),
        std::env::var("SWSIM_PASSWORD").unwrap_or_default(),
    );

    let client = match SwsimClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let to = Address {
        full_name: Some("Jordan Receiver".to_string()),
        address1: Some("500 Oak St".to_string()),
        city: Some("Centerville".to_string()),
        state: Some("OH".to_string()),
        zip_code: Some("45458".to_string()),
        ..Default::default()
    };

    println!("Cleansing ship-to address...");
    let cleansed = match client.cleanse_address(&to).await {
        Ok(response) if response.valid() => response,
        Ok(response) => {
            println!("✗ Service reported: {:?}", response.errors());
            return;
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Address cleansed: {:?}\n", cleansed.get("CleanseAddressResponse"));

    let return_address = Address {
        full_name: Some("Acme Fulfillment".to_string()),
        address1: Some("100 Depot Way".to_string()),
        city: Some("Dayton".to_string()),
        state: Some("OH".to_string()),
        zip_code: Some("45440".to_string()),
        ..Default::default()
    };

    let indicium = IndiciumRequest {
        rate: Some(RateRequest {
            from_zip_code: Some("45440".to_string()),
            to_zip_code: Some("45458".to_string()),
            weight_oz: Some("8.0".parse().unwrap()),
            service_type: Some("US-FC".to_string()),
            ship_date: "2026-08-10".parse().ok(),
            ..Default::default()
        }),
        to: Some(to),
        sample_only: Some(true),
        image_type: Some(ImageType::Png),
        ..Default::default()
    };

    println!("Creating sample label...");
    match client
        .create_indicium_with_return_address(&indicium, &return_address)
        .await
    {
        Ok(response) if response.valid() => {
            println!("✓ Label: {:?}", response.get("CreateIndiciumResponse"));
        }
        Ok(response) => println!("✗ Service reported: {:?}", response.errors()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ CreateIndicium example complete");
}
