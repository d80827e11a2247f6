//! Roster - export the user list of a GitLab instance to CSV.
//!
//! The pipeline is linear: request the user count, fetch every page in order,
//! then write one CSV row per user.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster::{Credentials, GitLabClient, export_roster};
//!
//! let creds = Credentials::new("https://gitlab.example.com", "glpat-...");
//! let client = GitLabClient::new(&creds);
//! let rows = export_roster(&client, Path::new("users.csv"), None).await?;
//! ```

pub mod error;
pub mod export;
pub mod gitlab;
pub mod http;
pub mod progress;

pub use error::{Result, RosterError};
pub use export::{DEFAULT_OUTPUT, ExportError, export_roster, write_users, write_users_to_path};
pub use gitlab::{Credentials, GitLabClient, GitLabError, GitLabUser};
pub use http::{HttpError, HttpHeaders, HttpRequest, HttpResponse, HttpTransport, header_get};
pub use progress::{ExportProgress, ProgressCallback, emit};
