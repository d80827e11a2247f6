//! GitLab API client for the user roster.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitLab API operations
//! - [`types`] - User record and connection settings
//! - [`client`] - User count request, page fetcher, and aggregation

mod client;
mod error;
mod types;

pub use client::{GitLabClient, PER_PAGE, TOKEN_HEADER, TOTAL_HEADER};
pub use error::GitLabError;
pub use types::{Credentials, GitLabUser};
