//! Seira: Sequential Retry Execution for Rust
//!
//! `seira` (σειρά, Greek for "series") runs an ordered sequence of
//! fallible asynchronous steps, retrying each failing step after a
//! strategy-computed delay until it succeeds, skips itself, cancels the
//! run, or the caller's cancellation signal fires.
//!
//! # Features
//!
//! - **Strict sequencing**: step *i+1* never starts before step *i* is
//!   satisfied
//! - **Pluggable delay strategies**: fixed delay, exponential backoff
//!   (bounded or unbounded), or any closure
//! - **Cooperative cancellation**: a shared [`CancellationToken`] observed
//!   at every suspension point, never busy-polled
//! - **No exceptional control flow**: a run always returns its
//!   [`ExecutionLog`]; failures are entries, not panics or `Err`s
//!
//! # Quick Start
//!
//! ```
//! use seira::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut attempts = 0;
//!     let flaky = move |_ctx: StepContext| {
//!         attempts += 1;
//!         let outcome = if attempts < 3 {
//!             StepOutcome::failed("connection reset")
//!         } else {
//!             StepOutcome::Success
//!         };
//!         async move { outcome }
//!     };
//!
//!     let executor = Executor::new(FixedDelay::new(Duration::from_millis(10)));
//!     let log = executor
//!         .run(steps![
//!             |_ctx| async { StepOutcome::Success },
//!             flaky,
//!         ])
//!         .await;
//!
//!     // Two failures were retried through; nothing cut the run short.
//!     assert_eq!(log.len(), 2);
//!     assert!(!log.was_canceled());
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`core`](crate::core): outcome, delay-strategy, and log types (hides
//!   the retry policy representation)
//! - [`executor`](crate::executor): the run loop and step context (hides
//!   sequencing and cancellation timing)
//!
//! # Cancellation Contract
//!
//! The token may be cancelled from any thread at any time. The executor
//! observes it after every step attempt and while waiting out a retry
//! delay; once observed, no further steps are invoked, exactly one
//! [`RunError::Canceled`](crate::core::RunError) marker is appended, and
//! the log is returned. A step returning `StepOutcome::Cancel` ends the
//! run the same way but leaves no marker.

pub mod core;
pub mod executor;

pub use crate::core::{
    delay_fn, BoxError, DelayFn, DelayStrategy, ExecutionLog, ExponentialBackoff, FixedDelay,
    RunError, StepOutcome,
};
pub use crate::executor::{boxed_step, BoxedStep, Executor, StepContext, StepFuture};

// Re-exported because these types appear in the public API; users get the
// same versions the crate was built against.
pub use tokio;
pub use tokio_util;
pub use tokio_util::sync::CancellationToken;

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use seira::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        delay_fn, BoxError, DelayFn, DelayStrategy, ExecutionLog, ExponentialBackoff, FixedDelay,
        RunError, StepOutcome,
    };
    pub use crate::executor::{boxed_step, BoxedStep, Executor, StepContext, StepFuture};
    pub use crate::steps;
    pub use tokio_util::sync::CancellationToken;
}
