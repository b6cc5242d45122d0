use thiserror::Error;

use crate::amount::DivisionError;

/// Errors surfaced by repository calls.
///
/// The in-memory sources only fail on arithmetic; `Unavailable` is the
/// variant a remote source (or a test double) reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("data source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error(transparent)]
    Division(#[from] DivisionError),
}
