//! Step outcomes.
//!
//! A step reports back to the executor through [`StepOutcome`], a tagged
//! variant rather than sentinel error values. This keeps the orchestration
//! decisions (`Skip`, `Cancel`) out of the error domain entirely and lets
//! the executor match on them exhaustively.

/// A boxed error that can be sent across threads.
///
/// This is the standard error type used throughout async Rust ecosystems
/// (tokio, tower, axum, etc.). Any error implementing `std::error::Error`
/// can be automatically converted to this type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The result of one step invocation.
///
/// Only `Failed` carries a payload; the payload is what ends up in the
/// run's [`ExecutionLog`](crate::core::ExecutionLog).
#[derive(Debug)]
pub enum StepOutcome {
    /// The step is satisfied. The executor advances to the next step.
    Success,
    /// An ordinary failure. Recorded in the log, then retried according to
    /// the run's delay strategy.
    Failed(BoxError),
    /// Treat the step as satisfied without recording a failure and without
    /// retrying. Advances to the next step.
    Skip,
    /// Abort the entire run now. Has the same run-terminating effect as the
    /// external cancellation signal, but leaves no log entry.
    Cancel,
}

impl StepOutcome {
    /// Shorthand for `StepOutcome::Failed(err.into())`.
    ///
    /// ```
    /// use seira::core::StepOutcome;
    ///
    /// let outcome = StepOutcome::failed("connection reset");
    /// assert!(matches!(outcome, StepOutcome::Failed(_)));
    /// ```
    pub fn failed(err: impl Into<BoxError>) -> Self {
        Self::Failed(err.into())
    }
}

impl<E> From<Result<(), E>> for StepOutcome
where
    E: Into<BoxError>,
{
    /// `Ok(())` becomes `Success`, `Err(e)` becomes `Failed(e)`.
    ///
    /// `Skip` and `Cancel` have no `Result` counterpart; steps that use
    /// them return [`StepOutcome`] directly.
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(err) => Self::Failed(err.into()),
        }
    }
}
