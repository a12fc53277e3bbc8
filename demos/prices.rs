//! Example listing availability and prices.
//!
//! # Running
//!
//! ```bash
//! GETALTS_TOKEN=your_token cargo run --example prices
//! ```

use getalts_client::{Country, GetAltsClient, Service};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("GETALTS_TOKEN").expect("GETALTS_TOKEN environment variable must be set");
    let client = GetAltsClient::new(token)?;

    let country = Country::Russia;
    let counts = client.get_available_numbers_count(country).await?;
    let prices = client.get_prices_by_country(country).await?;

    println!("=== Numbers in {} ===\n", country);
    for service in Service::ALL {
        let Some(count) = counts.get(service) else {
            continue;
        };
        match prices.get(service) {
            Some(price) => println!("{:<4} {:>6} available at {:.2}", service, count, price),
            None => println!("{:<4} {:>6} available", service, count),
        }
    }

    let service = Service::Telegram;
    let mut by_country: Vec<_> = client
        .get_prices_by_service(service)
        .await?
        .into_iter()
        .collect();
    by_country.sort_by(|a, b| a.1.total_cmp(&b.1));

    println!("\n=== Cheapest countries for {} ===\n", service);
    for (country, price) in by_country.iter().take(10) {
        println!("{:<4} {:.2}", country, price);
    }

    Ok(())
}
