//! High-level GetAlts client.

use crate::activation::{ActivationLifecycle, CodeHandler};
use crate::config::ClientConfig;
use crate::enums::{Country, Service};
use crate::errors::Result;
use crate::response::{BalanceResponse, PurchaseResponse, decode};
use crate::transport::{Endpoint, HttpTransport, Transport};
use crate::types::ActivationContext;
use reqwest_middleware::ClientWithMiddleware;
use std::collections::HashMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

#[cfg(feature = "tracing")]
use tracing::info;

/// Client for the GetAlts SMS activation service.
///
/// Buys numbers, reads balance and price lists, and drives activations
/// through their lifecycle. Cloning is cheap; clones share the HTTP
/// connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use getalts_client::{Country, GetAltsClient, Service, SyncHandler};
///
/// let client = GetAltsClient::new("your_token")?;
/// println!("Balance: {}", client.get_balance().await?);
///
/// let mut context = client.buy_number(Service::Telegram, Country::Russia).await?;
/// client.mark_ready_for_code(&mut context).await?;
///
/// client
///     .await_code(&mut context, SyncHandler(|ctx: &ActivationContext| {
///         println!("Got code {:?} for {}", ctx.code(), ctx.phone_number());
///     }))
///     .await?;
///
/// client.end_activation(&mut context).await?;
/// ```
#[derive(Debug, Clone)]
pub struct GetAltsClient<T: Transport = HttpTransport> {
    lifecycle: ActivationLifecycle<T>,
    config: ClientConfig,
}

/// Builder for configuring a [`GetAltsClient`] over HTTP.
pub struct GetAltsClientBuilder {
    token: String,
    endpoint: Option<Url>,
    config: ClientConfig,
    http_client: Option<ClientWithMiddleware>,
}

impl GetAltsClientBuilder {
    /// Create a new builder with the given API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: None,
            config: ClientConfig::default(),
            http_client: None,
        }
    }

    /// Set a custom API base URL.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the client configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set a custom HTTP client with middleware.
    ///
    /// The configured request timeout does not apply to a custom client.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`GetAltsClient`].
    pub fn build(self) -> Result<GetAltsClient> {
        self.config.validate()?;

        let mut transport = HttpTransport::builder(self.token).timeout(self.config.request_timeout);
        if let Some(endpoint) = self.endpoint {
            transport = transport.endpoint(endpoint);
        }
        if let Some(client) = self.http_client {
            transport = transport.http_client(client);
        }

        GetAltsClient::with_transport(transport.build()?, self.config)
    }
}

impl GetAltsClient {
    /// Create a client for the default API URL with default configuration.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder(token: impl Into<String>) -> GetAltsClientBuilder {
        GetAltsClientBuilder::new(token)
    }
}

impl<T: Transport> GetAltsClient<T> {
    /// Create a client over an existing transport.
    pub fn with_transport(transport: T, config: ClientConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            lifecycle: ActivationLifecycle::with_poll_interval(transport, config.poll_interval)?,
            config,
        })
    }

    /// Get reference to the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get reference to the underlying transport.
    pub fn transport(&self) -> &T {
        self.lifecycle.transport()
    }

    /// Get reference to the activation lifecycle driver.
    pub fn lifecycle(&self) -> &ActivationLifecycle<T> {
        &self.lifecycle
    }

    /// Get the account balance.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "GetAltsClient::get_balance", skip_all)
    )]
    pub async fn get_balance(&self) -> Result<f64> {
        let payload = self.transport().call(Endpoint::GetBalance, Vec::new()).await?;
        let response: BalanceResponse = decode(payload)?;
        Ok(response.balance)
    }

    /// Get how many numbers are available per service in a country.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "GetAltsClient::get_available_numbers_count",
            skip_all,
            fields(country = %country)
        )
    )]
    pub async fn get_available_numbers_count(
        &self,
        country: Country,
    ) -> Result<HashMap<Service, u64>> {
        let payload = self
            .transport()
            .call(Endpoint::GetAmount, vec![("country", country.code().to_string())])
            .await?;
        decode(payload)
    }

    /// Get the price of a number per service in a country.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "GetAltsClient::get_prices_by_country",
            skip_all,
            fields(country = %country)
        )
    )]
    pub async fn get_prices_by_country(&self, country: Country) -> Result<HashMap<Service, f64>> {
        let payload = self
            .transport()
            .call(
                Endpoint::GetPricesByCountry,
                vec![("country", country.code().to_string())],
            )
            .await?;
        decode(payload)
    }

    /// Get the price of a number for a service per country.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "GetAltsClient::get_prices_by_service",
            skip_all,
            fields(service = %service)
        )
    )]
    pub async fn get_prices_by_service(&self, service: Service) -> Result<HashMap<Country, f64>> {
        let payload = self
            .transport()
            .call(
                Endpoint::GetPricesByService,
                vec![("service", service.code().to_string())],
            )
            .await?;
        decode(payload)
    }

    /// Buy a number for `service` in `country`.
    ///
    /// The returned context has no code yet.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "GetAltsClient::buy_number",
            skip_all,
            fields(service = %service, country = %country)
        )
    )]
    pub async fn buy_number(&self, service: Service, country: Country) -> Result<ActivationContext> {
        let payload = self
            .transport()
            .call(
                Endpoint::BuyNumber,
                vec![
                    ("service", service.code().to_string()),
                    ("country", country.code().to_string()),
                ],
            )
            .await?;
        let purchase: PurchaseResponse = decode(payload)?;

        #[cfg(feature = "tracing")]
        info!(
            activation_id = %purchase.activation_id,
            phone_number = %purchase.phone_number,
            "Number purchased"
        );

        Ok(ActivationContext::with_status(
            purchase.phone_number,
            purchase.activation_id,
            purchase.status,
        ))
    }

    /// Fetch the current status and code of an activation.
    pub async fn get_activation_status<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.lifecycle.refresh_status(context).await
    }

    /// Tell the service the number has been used and a code is expected.
    pub async fn mark_ready_for_code<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.lifecycle.mark_ready_for_code(context).await
    }

    /// Complete the activation.
    pub async fn end_activation<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.lifecycle.end_activation(context).await
    }

    /// Ask for another code on the same number.
    pub async fn send_another_code<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.lifecycle.send_another_code(context).await
    }

    /// Report the number as already used on the target service.
    pub async fn mark_already_used<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.lifecycle.mark_already_used(context).await
    }

    /// Cancel the activation, falling back to marking it already used.
    ///
    /// See [`ActivationLifecycle::cancel_activation`].
    pub async fn cancel_activation<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.lifecycle.cancel_activation(context).await
    }

    /// Wait for a code using the configured `max_wait`.
    pub async fn await_code<H: CodeHandler>(
        &self,
        context: &mut ActivationContext,
        handler: H,
    ) -> Result<()> {
        self.lifecycle
            .await_code(context, handler, self.config.max_wait)
            .await
    }

    /// Wait for a code for at most `max_wait`.
    pub async fn await_code_for<H: CodeHandler>(
        &self,
        context: &mut ActivationContext,
        handler: H,
        max_wait: Duration,
    ) -> Result<()> {
        self.lifecycle.await_code(context, handler, max_wait).await
    }

    /// Wait for a code for at most `max_wait`, stopping early when
    /// `cancel_token` fires.
    pub async fn await_code_cancellable<H: CodeHandler>(
        &self,
        context: &mut ActivationContext,
        handler: H,
        max_wait: Duration,
        cancel_token: CancellationToken,
    ) -> Result<()> {
        self.lifecycle
            .await_code_cancellable(context, handler, max_wait, cancel_token)
            .await
    }
}
