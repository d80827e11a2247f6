//! Progress reporting for an export run.
//!
//! Events from the library are rendered as structured `tracing` records.

use roster::{ExportProgress, ProgressCallback};

/// Logging reporter using tracing for structured output.
pub struct LoggingReporter;

impl LoggingReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, event: ExportProgress) {
        match event {
            ExportProgress::CountingUsers => {
                tracing::debug!("Counting users");
            }

            ExportProgress::CountedUsers { total } => {
                tracing::info!(total, "Counted users");
            }

            ExportProgress::FetchedPage {
                page,
                count,
                total_so_far,
                expected_pages,
            } => {
                tracing::debug!(page, count, total_so_far, expected_pages, "Fetched page");
            }

            ExportProgress::FetchComplete { total } => {
                tracing::info!(total, "Fetch complete");
            }

            ExportProgress::WritingCsv { path, rows } => {
                tracing::debug!(path = %path.display(), rows, "Writing CSV");
            }

            ExportProgress::ExportComplete { path, rows } => {
                tracing::info!(path = %path.display(), rows, "Export complete");
            }

            _ => {}
        }
    }

    /// Wrap the reporter in a callback for the library.
    pub fn into_callback(self) -> ProgressCallback {
        Box::new(move |event| self.handle(event))
    }
}

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}
