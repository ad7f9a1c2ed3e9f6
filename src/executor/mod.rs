//! The execution engine.
//!
//! - [`Executor`]: the sequential retry loop
//! - [`StepContext`]: cancellation-aware context passed to every step
//!   invocation
//! - [`BoxedStep`] / [`StepFuture`] / [`boxed_step`]: the step
//!   representation consumed by [`Executor::run`]
//!
//! This module hides how steps are driven — sequencing, retry timing, and
//! cancellation observation all live here, behind `run`.

mod context;
mod runner;

pub use context::StepContext;
pub use runner::{boxed_step, BoxedStep, Executor, StepFuture};
