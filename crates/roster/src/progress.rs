//! Progress events for an export run.
//!
//! The library never logs progress itself beyond `debug` level; callers pass a
//! [`ProgressCallback`] and decide how to render each event.

use std::path::PathBuf;

/// Progress events emitted while exporting the roster.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ExportProgress {
    /// Sending the user count request.
    CountingUsers,

    /// User count request finished.
    CountedUsers {
        /// Value of the total header. Also used as the number of pages to
        /// fetch; zero or negative means no pages.
        total: i64,
    },

    /// Fetched one page of users.
    FetchedPage {
        /// Page number (1-indexed).
        page: u64,
        /// Number of users on this page.
        count: usize,
        /// Running total of users fetched so far.
        total_so_far: usize,
        /// Number of pages that will be requested.
        expected_pages: u64,
    },

    /// Finished fetching every page.
    FetchComplete {
        /// Number of users aggregated.
        total: usize,
    },

    /// Starting to write the CSV file.
    WritingCsv {
        path: PathBuf,
        /// Number of data rows that will be written.
        rows: usize,
    },

    /// CSV file written and flushed.
    ExportComplete { path: PathBuf, rows: usize },
}

/// Callback for progress updates.
pub type ProgressCallback = Box<dyn Fn(ExportProgress) + Send + Sync>;

/// Emit a progress event if a callback is provided.
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: ExportProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_with_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        let callback: ProgressCallback = Box::new(move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        emit(Some(&callback), ExportProgress::CountingUsers);
        emit(Some(&callback), ExportProgress::FetchComplete { total: 10 });

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_emit_without_callback() {
        emit(None, ExportProgress::CountedUsers { total: 3 });
    }

    #[test]
    fn test_progress_debug() {
        let event = ExportProgress::WritingCsv {
            path: PathBuf::from("users.csv"),
            rows: 2,
        };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("WritingCsv"));
        assert!(debug_str.contains("users.csv"));
    }
}
