//! Example demonstrating cancellation of a code wait.
//!
//! This example shows how to use `await_code_cancellable` to stop waiting for
//! a code from another task.
//!
//! # Running
//!
//! ```bash
//! GETALTS_TOKEN=your_token cargo run --example with_cancellation
//! ```

use getalts_client::{
    ActivationContext, AsyncHandler, CancellationToken, Country, GetAltsClient, GetAltsError,
    Service,
};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = env::var("GETALTS_TOKEN").expect("GETALTS_TOKEN environment variable must be set");
    let client = GetAltsClient::new(token)?;

    println!("Buying a WhatsApp number in Indonesia...");
    let mut context = client
        .buy_number(Service::Whatsapp, Country::Indonesia)
        .await?;
    println!("Got phone number: {}", context.phone_number());

    client.mark_ready_for_code(&mut context).await?;

    // Create a cancellation token
    let cancel_token = CancellationToken::new();
    let token_clone = cancel_token.clone();

    // Spawn a task that will cancel after 30 seconds if no SMS received
    let cancel_handle = tokio::spawn(async move {
        println!("\nWait 30s to cancel...");
        tokio::time::sleep(Duration::from_secs(30)).await;
        println!("Cancelling operation...");
        token_clone.cancel();
    });

    println!("\nWaiting for SMS code (cancellable)...");
    match client
        .await_code_cancellable(
            &mut context,
            AsyncHandler(|ctx: ActivationContext| async move {
                println!("Received SMS code: {:?}", ctx.code());
            }),
            Duration::from_secs(300),
            cancel_token,
        )
        .await
    {
        Ok(()) => {
            cancel_handle.abort(); // Stop the cancel timer
            client.end_activation(&mut context).await?;
        }
        Err(GetAltsError::Cancelled {
            elapsed,
            poll_count,
            ..
        }) => {
            println!(
                "Operation was cancelled after {:.1}s ({} polls)",
                elapsed.as_secs_f64(),
                poll_count
            );
            client.cancel_activation(&mut context).await?;
        }
        Err(GetAltsError::NoCodeReceived {
            elapsed,
            poll_count,
            ..
        }) => {
            println!(
                "Timed out after {:.1}s ({} polls)",
                elapsed.as_secs_f64(),
                poll_count
            );
            client.cancel_activation(&mut context).await?;
        }
        Err(e) => {
            println!("Error: {}", e);
        }
    }

    Ok(())
}
