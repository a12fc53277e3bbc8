//! Basic usage example for the GetAlts client.
//!
//! This example buys a number, waits for the verification code, and then
//! completes or cancels the activation.
//!
//! # Running
//!
//! ```bash
//! GETALTS_TOKEN=your_token cargo run --example basic_usage
//! ```

use getalts_client::{ActivationContext, Country, GetAltsClient, Service, SyncHandler};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get token from environment
    let token = env::var("GETALTS_TOKEN").expect("GETALTS_TOKEN environment variable must be set");

    // Default config: 10s request timeout, 60s max wait, 5s poll interval
    let client = GetAltsClient::new(token)?;

    println!("Balance: {}", client.get_balance().await?);

    println!("Buying a Telegram number in Russia...");
    let mut context = client.buy_number(Service::Telegram, Country::Russia).await?;

    println!("Got phone number:");
    println!("  Activation ID: {}", context.activation_id());
    println!("  Number: {}", context.phone_number());
    println!("  Status: {}", context.status());

    client.mark_ready_for_code(&mut context).await?;

    println!("\nWaiting for SMS code...");
    let result = client
        .await_code(
            &mut context,
            SyncHandler(|ctx: &ActivationContext| {
                if let Some(code) = ctx.code() {
                    println!("Received SMS code: {}", code);
                }
            }),
        )
        .await;

    match result {
        Ok(()) => {
            client.end_activation(&mut context).await?;
            println!("Activation finished");
        }
        Err(e) => {
            println!("Error: {}", e);
            // Refunds the number, falling back to "already used" if needed
            client.cancel_activation(&mut context).await?;
            println!("Activation cancelled ({})", context.status());
        }
    }

    Ok(())
}
