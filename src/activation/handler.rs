//! Callbacks invoked when a code arrives.

use crate::types::ActivationContext;
use std::future::Future;

/// Reaction to a code arriving during `await_code`.
///
/// The wait invokes the handler exactly once, with the context that carries
/// the code, and awaits it before returning. Plain closures go through
/// [`SyncHandler`], closures returning a future through [`AsyncHandler`]; the
/// wait treats both the same way.
///
/// # Example
///
/// ```rust,ignore
/// use getalts_client::{AsyncHandler, SyncHandler};
///
/// client
///     .await_code(&mut context, SyncHandler(|ctx: &ActivationContext| {
///         println!("code: {:?}", ctx.code());
///     }))
///     .await?;
///
/// client
///     .await_code(&mut context, AsyncHandler(|ctx: ActivationContext| async move {
///         store_code(ctx).await;
///     }))
///     .await?;
/// ```
pub trait CodeHandler: Send {
    /// Handle the context a code was received for.
    fn handle(self, context: &ActivationContext) -> impl Future<Output = ()> + Send;
}

/// Adapter for a synchronous closure.
pub struct SyncHandler<F>(pub F);

impl<F> CodeHandler for SyncHandler<F>
where
    F: FnOnce(&ActivationContext) + Send,
{
    async fn handle(self, context: &ActivationContext) {
        (self.0)(context)
    }
}

/// Adapter for a closure returning a future.
///
/// The closure receives its own copy of the context so the future it returns
/// does not borrow from the wait.
pub struct AsyncHandler<F>(pub F);

impl<F, Fut> CodeHandler for AsyncHandler<F>
where
    F: FnOnce(ActivationContext) -> Fut + Send,
    Fut: Future<Output = ()> + Send,
{
    fn handle(self, context: &ActivationContext) -> impl Future<Output = ()> + Send {
        (self.0)(context.clone())
    }
}
