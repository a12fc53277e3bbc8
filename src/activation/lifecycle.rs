//! Activation status changes and the bounded wait for a code.

use super::handler::CodeHandler;
use crate::config::DEFAULT_POLL_INTERVAL;
use crate::enums::Action;
use crate::errors::{GetAltsError, Result};
use crate::response::decode;
use crate::transport::{Endpoint, Transport};
use crate::types::{ActivationContext, StatusUpdate};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[cfg(feature = "tracing")]
use tracing::{debug, info, warn};

/// Drives the remote lifecycle of activations.
///
/// Every operation takes the caller's context by mutable reference, updates
/// its status and code from the service's answer, and hands the same
/// reference back. A failed call leaves the context untouched.
#[derive(Debug, Clone)]
pub struct ActivationLifecycle<T: Transport> {
    transport: T,
    poll_interval: Duration,
}

impl<T: Transport> ActivationLifecycle<T> {
    /// Create a lifecycle driver polling every 5 seconds.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Create a lifecycle driver with a custom poll interval.
    ///
    /// A zero interval is rejected with [`GetAltsError::InvalidConfig`].
    pub fn with_poll_interval(transport: T, poll_interval: Duration) -> Result<Self> {
        if poll_interval.is_zero() {
            return Err(GetAltsError::InvalidConfig {
                reason: "poll_interval must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            transport,
            poll_interval,
        })
    }

    /// Get reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Interval between status polls while waiting for a code.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    async fn refresh(&self, context: &mut ActivationContext) -> Result<()> {
        let payload = self
            .transport
            .call(
                Endpoint::GetActivationStatus,
                vec![("activation_id", context.activation_id().to_string())],
            )
            .await?;

        let update: StatusUpdate = decode(payload)?;
        context.apply(update);
        Ok(())
    }

    async fn update(&self, context: &mut ActivationContext, action: Action) -> Result<()> {
        let payload = self
            .transport
            .call(
                Endpoint::SetActivationStatus,
                vec![
                    ("activation_id", context.activation_id().to_string()),
                    ("status", action.query_value()),
                ],
            )
            .await?;

        let update: StatusUpdate = decode(payload)?;
        context.apply(update);

        #[cfg(feature = "tracing")]
        debug!(
            activation_id = %context.activation_id(),
            action = %action,
            status = %context.status(),
            "Activation status changed"
        );

        Ok(())
    }

    /// Fetch the current status and code of an activation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ActivationLifecycle::refresh_status",
            skip_all,
            fields(activation_id = %context.activation_id())
        )
    )]
    pub async fn refresh_status<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.refresh(context).await?;
        Ok(context)
    }

    pub(crate) async fn set_status<'a>(
        &self,
        context: &'a mut ActivationContext,
        action: Action,
    ) -> Result<&'a mut ActivationContext> {
        self.update(context, action).await?;
        Ok(context)
    }

    /// Tell the service the number has been used and a code is expected.
    pub async fn mark_ready_for_code<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.set_status(context, Action::SendSms).await
    }

    /// Complete the activation.
    pub async fn end_activation<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.set_status(context, Action::End).await
    }

    /// Ask for another code on the same number.
    pub async fn send_another_code<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.set_status(context, Action::SendAnotherCode).await
    }

    /// Report the number as already used on the target service.
    ///
    /// The service refunds the activation.
    pub async fn mark_already_used<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        self.set_status(context, Action::AlreadyUsed).await
    }

    /// Cancel the activation.
    ///
    /// If the service refuses to cancel from the current status, the number
    /// is marked as already used instead, which refunds it as well. Only a
    /// service rejection triggers that fallback; transport and decoding
    /// failures are returned as-is.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ActivationLifecycle::cancel_activation",
            skip_all,
            fields(activation_id = %context.activation_id())
        )
    )]
    pub async fn cancel_activation<'a>(
        &self,
        context: &'a mut ActivationContext,
    ) -> Result<&'a mut ActivationContext> {
        match self.update(context, Action::Cancel).await {
            Ok(()) => {}
            Err(GetAltsError::Api(_error)) => {
                #[cfg(feature = "tracing")]
                info!(
                    error = %_error,
                    "Cancelling not possible, marking number as already used instead"
                );

                self.update(context, Action::AlreadyUsed).await?;
            }
            Err(e) => return Err(e),
        }

        Ok(context)
    }

    /// Poll until the service reports a code, then run `handler` once.
    ///
    /// Fails with [`GetAltsError::NoCodeReceived`] once `max_wait` has
    /// elapsed since the call started; slow polls count against it. Any
    /// failed poll aborts the wait. Dropping the returned future stops it.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ActivationLifecycle::await_code",
            skip_all,
            fields(activation_id = %context.activation_id())
        )
    )]
    pub async fn await_code<H: CodeHandler>(
        &self,
        context: &mut ActivationContext,
        handler: H,
        max_wait: Duration,
    ) -> Result<()> {
        self.poll_for_code(context, handler, max_wait, None).await
    }

    /// Same as [`await_code`](Self::await_code), but stops with
    /// [`GetAltsError::Cancelled`] as soon as `cancel_token` fires, whether
    /// the wait is sleeping or a poll is in flight. The handler is never run
    /// after cancellation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ActivationLifecycle::await_code_cancellable",
            skip_all,
            fields(activation_id = %context.activation_id())
        )
    )]
    pub async fn await_code_cancellable<H: CodeHandler>(
        &self,
        context: &mut ActivationContext,
        handler: H,
        max_wait: Duration,
        cancel_token: CancellationToken,
    ) -> Result<()> {
        self.poll_for_code(context, handler, max_wait, Some(&cancel_token))
            .await
    }

    async fn poll_for_code<H: CodeHandler>(
        &self,
        context: &mut ActivationContext,
        handler: H,
        max_wait: Duration,
        cancel_token: Option<&CancellationToken>,
    ) -> Result<()> {
        let activation_id = context.activation_id();
        let start = Instant::now();
        let mut poll_count: u32 = 0;

        #[cfg(feature = "tracing")]
        debug!(max_wait_secs = %max_wait.as_secs_f64(), "Waiting for code");

        loop {
            let elapsed = start.elapsed();
            if elapsed >= max_wait {
                #[cfg(feature = "tracing")]
                warn!(
                    elapsed_secs = %elapsed.as_secs_f64(),
                    poll_count,
                    "No code received before deadline"
                );

                return Err(GetAltsError::NoCodeReceived {
                    max_wait,
                    elapsed,
                    poll_count,
                    activation_id,
                });
            }

            poll_count += 1;

            #[cfg(feature = "tracing")]
            debug!(poll_count, "Checking activation status for code");

            tokio::select! {
                biased;
                _ = cancelled(cancel_token) => {
                    return Err(GetAltsError::Cancelled {
                        elapsed: start.elapsed(),
                        poll_count,
                        activation_id,
                    });
                }
                result = self.refresh(context) => result?,
            }

            if context.code().is_some() {
                if cancel_token.is_some_and(CancellationToken::is_cancelled) {
                    return Err(GetAltsError::Cancelled {
                        elapsed: start.elapsed(),
                        poll_count,
                        activation_id,
                    });
                }

                #[cfg(feature = "tracing")]
                info!(
                    elapsed_secs = %start.elapsed().as_secs_f64(),
                    poll_count,
                    "Code received"
                );

                handler.handle(context).await;
                return Ok(());
            }

            tokio::select! {
                biased;
                _ = cancelled(cancel_token) => {
                    return Err(GetAltsError::Cancelled {
                        elapsed: start.elapsed(),
                        poll_count,
                        activation_id,
                    });
                }
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }
    }
}

/// Resolves when the token fires; never resolves without a token.
async fn cancelled(cancel_token: Option<&CancellationToken>) {
    match cancel_token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}
