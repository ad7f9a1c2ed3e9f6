//! Per-invocation execution context.
//!
//! Every step invocation receives a [`StepContext`] observing the run's
//! cancellation token. A well-behaved step checks or awaits it so it can
//! abort promptly; the executor does not require it to.

use tokio_util::sync::CancellationToken;

/// Cancellation-aware context handed to each step invocation.
///
/// Cloning is cheap; the context can be moved into work the step spawns.
#[derive(Clone, Debug)]
pub struct StepContext {
    token: CancellationToken,
}

impl StepContext {
    /// Creates a context observing `token`.
    ///
    /// The executor builds one per invocation; constructing one directly
    /// is useful when exercising a step in isolation.
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Whether the run's cancellation signal has been asserted.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes when the run's cancellation signal is asserted.
    ///
    /// Typical use inside a step:
    ///
    /// ```ignore
    /// tokio::select! {
    ///     _ = ctx.cancelled() => StepOutcome::Cancel,
    ///     result = do_work() => result.into(),
    /// }
    /// ```
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// The underlying token, for handing to spawned tasks.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn context_observes_the_shared_token() {
        let token = CancellationToken::new();
        let ctx = StepContext::new(token.clone());

        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());

        // Already-asserted signals resolve immediately.
        ctx.cancelled().await;
    }
}
