//! The execution log.
//!
//! A run's only output. Every ordinary step failure is appended in the
//! order observed; an externally-cancelled run additionally ends with
//! exactly one [`RunError::Canceled`] marker. Nothing is ever thrown out
//! of the executor — callers inspect the log instead.

use crate::core::BoxError;
use thiserror::Error;

/// One recorded event of a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// An ordinary step failure, exactly as the step returned it.
    #[error("step failed: {0}")]
    Step(#[source] BoxError),

    /// The external cancellation signal cut the run short. Appended at
    /// most once, always as the final entry. A step's `Cancel` outcome
    /// terminates the run without this marker.
    #[error("run canceled")]
    Canceled,
}

impl RunError {
    /// The underlying step error, when this entry is a step failure.
    pub fn step_error(&self) -> Option<&BoxError> {
        match self {
            Self::Step(err) => Some(err),
            Self::Canceled => None,
        }
    }
}

/// Ordered record of everything that went wrong during a run.
///
/// An empty log means every step succeeded on its first attempt with no
/// cancellation. The log dereferences to `[RunError]`, so slice accessors
/// (`len`, `is_empty`, iteration, indexing) work directly.
#[derive(Debug, Default)]
pub struct ExecutionLog {
    entries: Vec<RunError>,
}

impl ExecutionLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, entry: RunError) {
        self.entries.push(entry);
    }

    /// The recorded entries, oldest first.
    pub fn entries(&self) -> &[RunError] {
        &self.entries
    }

    /// Whether the run was cut short by the external cancellation signal.
    ///
    /// The marker is always terminal, so only the last entry is examined.
    /// Runs ended by a step's `Cancel` outcome carry no marker and report
    /// `false` here.
    pub fn was_canceled(&self) -> bool {
        matches!(self.entries.last(), Some(RunError::Canceled))
    }

    /// Consumes the log, yielding the raw entries.
    pub fn into_entries(self) -> Vec<RunError> {
        self.entries
    }
}

impl std::ops::Deref for ExecutionLog {
    type Target = [RunError];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl IntoIterator for ExecutionLog {
    type Item = RunError;
    type IntoIter = std::vec::IntoIter<RunError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExecutionLog {
    type Item = &'a RunError;
    type IntoIter = std::slice::Iter<'a, RunError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
