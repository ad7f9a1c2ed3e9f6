//! The sequential retry executor.
//!
//! [`Executor::run`] drives an ordered list of steps to completion:
//! each step is invoked, retried after a strategy-computed delay while it
//! keeps failing, and only then is the next step started. Both suspension
//! points — the step invocation itself (via [`StepContext`]) and the
//! inter-retry delay — observe the run's cancellation token.

use crate::core::{DelayStrategy, ExecutionLog, RunError, StepOutcome};
use crate::executor::StepContext;
use std::future::Future;
use std::pin::Pin;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// The future produced by one step invocation.
pub type StepFuture = Pin<Box<dyn Future<Output = StepOutcome> + Send>>;

/// A boxed step. `FnMut` because a failing step is invoked again for every
/// retry; each invocation receives a fresh [`StepContext`].
pub type BoxedStep = Box<dyn FnMut(StepContext) -> StepFuture + Send>;

/// Boxes a closure as a [`BoxedStep`].
///
/// The [`steps!`](crate::steps) macro applies this to every element, so
/// direct calls are only needed when assembling step lists by hand.
pub fn boxed_step<F, Fut>(mut step: F) -> BoxedStep
where
    F: FnMut(StepContext) -> Fut + Send + 'static,
    Fut: Future<Output = StepOutcome> + Send + 'static,
{
    Box::new(move |ctx| Box::pin(step(ctx)))
}

/// Builds a `Vec<BoxedStep>` from closures.
///
/// ```
/// use seira::prelude::*;
///
/// let sequence = steps![
///     |_ctx| async { StepOutcome::Success },
///     |ctx: StepContext| async move {
///         if ctx.is_cancelled() {
///             StepOutcome::Cancel
///         } else {
///             StepOutcome::Skip
///         }
///     },
/// ];
/// assert_eq!(sequence.len(), 2);
/// ```
#[macro_export]
macro_rules! steps {
    ($($step:expr),* $(,)?) => {
        ::std::vec![$($crate::executor::boxed_step($step)),*]
    };
}

/// Runs ordered sequences of fallible steps under a delay strategy and a
/// shared cancellation token.
///
/// The executor never fails a run itself: [`run`](Executor::run) always
/// returns an [`ExecutionLog`], possibly empty. See the crate docs for the
/// full decision table.
pub struct Executor<D> {
    strategy: D,
    cancellation: CancellationToken,
}

impl<D: DelayStrategy> Executor<D> {
    /// Creates an executor with its own cancellation token.
    pub fn new(strategy: D) -> Self {
        Self {
            strategy,
            cancellation: CancellationToken::new(),
        }
    }

    /// Replaces the cancellation token with a caller-supplied one.
    ///
    /// The token may be cancelled from any thread at any time; the
    /// executor only ever reads it.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// The token this executor observes. Clone it to cancel a run in
    /// flight.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Executes `steps` in order, retrying failures per the delay
    /// strategy, and returns the log of everything observed.
    ///
    /// Per step, with a failure counter that resets on every advance:
    ///
    /// - `Success` — advance.
    /// - `Skip` — advance; nothing is recorded and the counter is not
    ///   incremented.
    /// - `Cancel` — return the log as accumulated, with no entry for the
    ///   sentinel itself.
    /// - `Failed(err)` — record `err`, increment the counter, and ask the
    ///   strategy: `Some(delay)` races the delay against cancellation and
    ///   then re-invokes the same step; `None` exhausts the step and
    ///   advances despite the failure.
    ///
    /// The cancellation token is checked after every advance (including
    /// past the final step) and during every delay wait. When it is the
    /// token that ends the run, exactly one [`RunError::Canceled`] marker
    /// is appended as the final entry; no further steps are invoked.
    pub async fn run<I>(&self, steps: I) -> ExecutionLog
    where
        I: IntoIterator<Item = BoxedStep>,
    {
        let mut log = ExecutionLog::new();

        'sequence: for (index, mut step) in steps.into_iter().enumerate() {
            // Explicit per-step state: reset on advance, retained across
            // retries of the same step.
            let mut failures: u32 = 0;

            loop {
                let outcome = step(StepContext::new(self.cancellation.clone())).await;

                let advance = match outcome {
                    StepOutcome::Success => true,
                    StepOutcome::Skip => {
                        debug!("step {} skipped", index);
                        true
                    }
                    StepOutcome::Cancel => {
                        debug!("step {} canceled the run", index);
                        return log;
                    }
                    StepOutcome::Failed(error) => {
                        failures += 1;
                        debug!("step {} failed (failure {}): {}", index, failures, error);
                        log.record(RunError::Step(error));

                        match self.strategy.delay_for_failure(failures) {
                            Some(delay) => {
                                tokio::select! {
                                    biased;

                                    _ = self.cancellation.cancelled() => {
                                        debug!("canceled while waiting to retry step {}", index);
                                        log.record(RunError::Canceled);
                                        return log;
                                    }
                                    _ = tokio::time::sleep(delay) => {}
                                }
                                false
                            }
                            None => {
                                warn!(
                                    "step {} exhausted its retries after {} failures",
                                    index, failures
                                );
                                true
                            }
                        }
                    }
                };

                if advance {
                    if self.cancellation.is_cancelled() {
                        debug!("canceled after step {}", index);
                        log.record(RunError::Canceled);
                        return log;
                    }
                    continue 'sequence;
                }
            }
        }

        log
    }
}
