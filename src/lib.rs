//! # GetAlts Client
//!
//! An async client for the GetAlts SMS activation service.
//!
//! Buy a temporary phone number for a target service and country, wait for
//! the verification code sent to it, and drive the activation through its
//! lifecycle (ready, finished, cancelled, already used).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use getalts_client::{ActivationContext, Country, GetAltsClient, Service, SyncHandler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GetAltsClient::new("your_token")?;
//!
//!     let mut context = client.buy_number(Service::Telegram, Country::Russia).await?;
//!     println!("Got number: {}", context.phone_number());
//!
//!     client.mark_ready_for_code(&mut context).await?;
//!
//!     let result = client
//!         .await_code(&mut context, SyncHandler(|ctx: &ActivationContext| {
//!             println!("Got code: {:?}", ctx.code());
//!         }))
//!         .await;
//!
//!     match result {
//!         Ok(()) => {
//!             client.end_activation(&mut context).await?;
//!         }
//!         Err(e) => {
//!             eprintln!("{e}");
//!             client.cancel_activation(&mut context).await?;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! GetAltsClient<T>
//!         │
//!         ▼
//! ActivationLifecycle<T>  (status changes, cancel fallback, code wait)
//!         │
//!         ▼
//!     Transport           (trait: HttpTransport, or your own)
//! ```
//!
//! ## Features
//!
//! - `tracing` - OpenTelemetry tracing instrumentation (enabled by default)

pub mod activation;
pub mod client;
pub mod config;
pub mod enums;
pub mod errors;
pub mod response;
pub mod transport;
pub mod types;

// Re-export commonly used types at the crate root
pub use activation::{ActivationLifecycle, AsyncHandler, CodeHandler, SyncHandler};
pub use client::{GetAltsClient, GetAltsClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use enums::{Country, Service, Status, UnknownWireCode};
pub use errors::{ApiError, GetAltsError, Result, RetryableError};
pub use response::{ApiResponse, Payload};
pub use transport::{Endpoint, HttpTransport, HttpTransportBuilder, Transport};
pub use types::{ActivationContext, ActivationId, PhoneNumber, SmsCode};
pub use tokio_util::sync::CancellationToken;
