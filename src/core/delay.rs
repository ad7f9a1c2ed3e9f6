//! Delay strategies.
//!
//! A delay strategy answers one question: given that the current step has
//! now failed `n` consecutive times, how long should the executor wait
//! before retrying it — or should it stop retrying and move on?
//!
//! The answer is an `Option<Duration>`: `Some(delay)` means wait and
//! retry, `None` means the strategy has exhausted this step. There is no
//! sign convention on the duration and no sentinel value.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maps a step's consecutive-failure count to a retry delay.
///
/// `failures` is 1-indexed: the executor queries the strategy with `1`
/// after the first failure of a step. The count is per-step; it resets
/// whenever the run advances to a new step, so an early flaky step cannot
/// consume a later step's allowance.
///
/// Implementations must be pure with respect to `failures` — the executor
/// may query the same count more than once across runs.
pub trait DelayStrategy {
    /// `Some(delay)` to wait `delay` and retry the same step, `None` to
    /// stop retrying it and advance.
    fn delay_for_failure(&self, failures: u32) -> Option<Duration>;
}

/// Adapter that turns a closure into a [`DelayStrategy`].
///
/// # Example
///
/// ```
/// use seira::core::{delay_fn, DelayStrategy};
/// use std::time::Duration;
///
/// // Linear ramp, giving up after five failures.
/// let strategy = delay_fn(|failures| {
///     (failures <= 5).then(|| Duration::from_millis(50) * failures)
/// });
/// assert_eq!(strategy.delay_for_failure(2), Some(Duration::from_millis(100)));
/// assert_eq!(strategy.delay_for_failure(6), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DelayFn<F>(F);

/// Wraps `f` in a [`DelayFn`].
pub fn delay_fn<F>(f: F) -> DelayFn<F>
where
    F: Fn(u32) -> Option<Duration>,
{
    DelayFn(f)
}

impl<F> DelayStrategy for DelayFn<F>
where
    F: Fn(u32) -> Option<Duration>,
{
    fn delay_for_failure(&self, failures: u32) -> Option<Duration> {
        (self.0)(failures)
    }
}

/// Waits the same duration before every retry, without limit.
///
/// A step governed by `FixedDelay` is retried until it stops returning
/// ordinary failures; the strategy itself never exhausts it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Creates a strategy that always waits `delay` between retries.
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured inter-retry delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl DelayStrategy for FixedDelay {
    fn delay_for_failure(&self, _failures: u32) -> Option<Duration> {
        Some(self.delay)
    }
}

/// Exponential backoff: the n-th consecutive failure waits
/// `100ms * 2^(n-1)`.
///
/// The schedule is 100ms, 200ms, 400ms, ... with no jitter and no upper
/// cap on the computed duration (it saturates at `Duration::MAX` rather
/// than overflowing). A bounded instance stops after `max_retries`
/// failures; an unbounded one never stops.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExponentialBackoff {
    max_retries: Option<u32>,
}

impl ExponentialBackoff {
    /// Delay after the first failure; doubles with each further failure.
    pub const BASE_DELAY: Duration = Duration::from_millis(100);

    /// Backoff that gives up on a step after `max_retries` failures.
    ///
    /// `limited(3)` waits 100ms, 200ms, 400ms after the first three
    /// failures and returns `None` from the fourth failure on.
    /// `limited(0)` never retries at all.
    pub const fn limited(max_retries: u32) -> Self {
        Self {
            max_retries: Some(max_retries),
        }
    }

    /// Backoff that never stops retrying.
    pub const fn unlimited() -> Self {
        Self { max_retries: None }
    }

    /// The retry limit, or `None` when unbounded.
    pub const fn max_retries(&self) -> Option<u32> {
        self.max_retries
    }
}

impl DelayStrategy for ExponentialBackoff {
    fn delay_for_failure(&self, failures: u32) -> Option<Duration> {
        if let Some(max) = self.max_retries {
            if failures > max {
                return None;
            }
        }

        let exponent = failures.saturating_sub(1) as f64;
        let secs = Self::BASE_DELAY.as_secs_f64() * 2f64.powf(exponent);
        Some(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
    }
}
