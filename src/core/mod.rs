//! Foundation types for sequential retry execution.
//!
//! # Domain Model
//! - [`StepOutcome`]: what one step invocation reports back
//!   (`Success`, `Failed`, `Skip`, `Cancel`)
//! - [`BoxError`]: the boxed error type carried by failures
//!
//! # Retry Behavior
//! - [`DelayStrategy`]: consecutive-failure count → `Option<Duration>`
//! - [`FixedDelay`]: constant delay, unbounded retries
//! - [`ExponentialBackoff`]: 100ms · 2^(n−1), bounded or unbounded
//! - [`DelayFn`] / [`delay_fn`]: closures as strategies
//!
//! # Run Output
//! - [`ExecutionLog`]: ordered record of a run's failures
//! - [`RunError`]: one log entry (step failure or cancellation marker)

mod delay;
mod log;
mod outcome;

pub use delay::{delay_fn, DelayFn, DelayStrategy, ExponentialBackoff, FixedDelay};
pub use log::{ExecutionLog, RunError};
pub use outcome::{BoxError, StepOutcome};
