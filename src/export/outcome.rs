//! Result of one export action as seen by the caller.

use std::process::ExitCode;

use super::ExportError;

/// Why a request was dropped without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No asset is selected.
    NothingSelected,
    /// The selection's SVG has not been loaded yet.
    SvgNotLoaded,
    /// Another job of the same kind is in flight.
    Busy,
    /// Batch with no items.
    EmptyBatch,
}

/// Outcome of an export job. Errors are reported here instead of being
/// propagated; the user has already been notified when this is returned.
#[derive(Debug)]
pub enum Outcome<T> {
    Saved(T),
    Skipped(SkipReason),
    Failed(ExportError),
}

impl<T> Outcome<T> {
    pub fn saved(&self) -> Option<&T> {
        match self {
            Self::Saved(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    pub fn skipped(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped(reason) => Some(*reason),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ExportError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Process exit status for a CLI run of this job.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Failed(_) => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    }
}
