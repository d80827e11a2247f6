//! Top-level error type for an export run.

use thiserror::Error;

use crate::export::ExportError;
use crate::gitlab::GitLabError;

/// Any failure that stops an export. None of them are retried.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    GitLab(#[from] GitLabError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, RosterError>;
