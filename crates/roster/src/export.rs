//! CSV export of the user roster.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::RosterError;
use crate::gitlab::{GitLabClient, GitLabUser};
use crate::progress::{ExportProgress, ProgressCallback, emit};

/// Output file written when no other path is given.
pub const DEFAULT_OUTPUT: &str = "users.csv";

/// Header row of the exported file.
pub const CSV_HEADER: [&str; 5] = ["ID", "Username", "Name", "Email", "State"];

/// Errors that can occur while writing the CSV file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Error creating CSV file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Error flushing CSV output: {0}")]
    Io(#[from] io::Error),
}

/// Write the header and one row per user to `writer`, in order.
///
/// Quoting follows standard CSV rules: a field is quoted only when it holds
/// the delimiter, a quote, or a line break. Rows end with `\n`.
pub fn write_users<W: io::Write>(writer: W, users: &[GitLabUser]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;

    for user in users {
        let id = user.id.to_string();
        csv.write_record([
            id.as_str(),
            user.username.as_str(),
            user.name.as_str(),
            user.email.as_str(),
            user.state.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write `users` to it.
///
/// On failure the file may be left partially written.
pub fn write_users_to_path(
    path: &Path,
    users: &[GitLabUser],
    on_progress: Option<&ProgressCallback>,
) -> Result<(), ExportError> {
    emit(
        on_progress,
        ExportProgress::WritingCsv {
            path: path.to_path_buf(),
            rows: users.len(),
        },
    );

    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_users(file, users)?;

    emit(
        on_progress,
        ExportProgress::ExportComplete {
            path: path.to_path_buf(),
            rows: users.len(),
        },
    );
    Ok(())
}

/// Fetch the whole roster from `client` and write it to `path`.
///
/// The output file is only created once every page has been fetched, so a
/// failed listing never touches `path`. Returns the number of rows written.
pub async fn export_roster(
    client: &GitLabClient,
    path: &Path,
    on_progress: Option<&ProgressCallback>,
) -> Result<usize, RosterError> {
    let users = client.list_all_users(on_progress).await?;
    write_users_to_path(path, &users, on_progress)?;
    Ok(users.len())
}
