//! GitLab API error types.

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur when reading users from the GitLab API.
#[derive(Debug, Error)]
pub enum GitLabError {
    /// The request URL could not be built from the base URL.
    #[error("Invalid request URL {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Network failure or unreadable response body.
    #[error("HTTP request error: {0}")]
    Http(#[from] HttpError),

    /// API returned a non-2xx status.
    #[error("GitLab API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The user count response had no total header.
    #[error("{0} header not found")]
    MissingTotalHeader(&'static str),

    /// The total header was present but not an integer.
    #[error("Invalid {header} header value {value:?}: {source}")]
    InvalidTotalHeader {
        header: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Response body was not a JSON array of users.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GitLabError {
    /// Build an API error from a response status and body.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        Self::Api {
            status,
            message: String::from_utf8_lossy(body).trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_status_and_body() {
        let err = GitLabError::from_status(401, b"{\"message\":\"401 Unauthorized\"}\n");
        match err {
            GitLabError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "{\"message\":\"401 Unauthorized\"}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_messages() {
        let err = GitLabError::MissingTotalHeader("X-Total");
        assert_eq!(err.to_string(), "X-Total header not found");

        let source = "abc".parse::<u64>().unwrap_err();
        let err = GitLabError::InvalidTotalHeader {
            header: "X-Total",
            value: "abc".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid X-Total header value \"abc\""));
    }
}
