/*
[INPUT]:  Integration credentials from environment variables
[OUTPUT]: Available rates printed for a sample package
[POS]:    Examples - rating flow
[UPDATE]: When the rating surface changes
*/

use swsim_adapter::*;

/// Example: request rates for an 8 oz package between two Ohio ZIP codes.
///
/// Requires SWSIM_INTEGRATION_ID, SWSIM_USERNAME and SWSIM_PASSWORD.
#[tokio::main]
async fn main() {
    println!("=== SWSIM GetRates Example ===\n");

    let credentials = match credentials_from_env() {
        Some(c) => c,
        None => {
            eprintln!("Set SWSIM_INTEGRATION_ID, SWSIM_USERNAME and SWSIM_PASSWORD first");
            return;
        }
    };

    let client = match SwsimClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created (token mode)\n");

    let rate = RateRequest {
        from_zip_code: Some("45440".to_string()),
        to_zip_code: Some("45458".to_string()),
        weight_oz: Some("8.0".parse().unwrap()),
        ship_date: "2026-08-10".parse().ok(),
        ..Default::default()
    };

    println!("Requesting rates...");
    match client.get_rates(&rate).await {
        Ok(response) if response.valid() => {
            for entry in response.rates() {
                println!(
                    "✓ {}: {}",
                    entry["ServiceType"].as_str().unwrap_or("?"),
                    entry["Amount"].as_str().unwrap_or("?")
                );
            }
        }
        Ok(response) => println!("✗ Service reported: {:?}", response.errors()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ GetRates example complete");
}

fn credentials_from_env() -> Option<Credentials> {
    Some(Credentials::new(
        std::env::var("SWSIM_INTEGRATION_ID").ok()?,
        std::env::var("SWSIM_USERNAME").ok()?,
        std::env::var("SWSIM_PASSWORD").ok()?,
    ))
}
