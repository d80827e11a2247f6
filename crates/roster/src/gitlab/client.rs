//! GitLab users API client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use super::error::GitLabError;
use super::types::{Credentials, GitLabUser};
use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::progress::{ExportProgress, ProgressCallback, emit};

/// Users requested per page.
pub const PER_PAGE: u32 = 50;

/// Response header carrying the total number of results.
pub const TOTAL_HEADER: &str = "X-Total";

/// Request header carrying the access token.
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

const USERS_PATH: &str = "/api/v4/users";

/// GitLab API client for the user listing endpoint.
///
/// Requests are sent one at a time; nothing here spawns or runs concurrently.
#[derive(Clone)]
pub struct GitLabClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    token: String,
}

impl GitLabClient {
    /// Create a client backed by a default reqwest client.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let creds = Credentials::new("https://gitlab.example.com", "glpat-...");
    /// let client = GitLabClient::new(&creds);
    /// let users = client.list_all_users(None).await?;
    /// ```
    pub fn new(credentials: &Credentials) -> Self {
        Self::new_with_transport(credentials, Arc::new(ReqwestTransport::default()))
    }

    pub fn new_with_transport(
        credentials: &Credentials,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            base_url: credentials.base_url.clone(),
            token: credentials.token.clone(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the users endpoint URL, optionally for a specific page.
    ///
    /// The base URL is concatenated as given; a trailing slash is not removed.
    fn users_url(&self, page: Option<u64>) -> Result<Url, GitLabError> {
        let raw = format!("{}{}", self.base_url, USERS_PATH);
        let mut url = Url::parse(&raw).map_err(|source| GitLabError::Request {
            url: raw.clone(),
            source,
        })?;

        if let Some(page) = page {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string())
                .append_pair("per_page", &PER_PAGE.to_string());
        }

        Ok(url)
    }

    /// Make an authenticated GET request and fail on a non-2xx status.
    async fn get(&self, url: Url) -> Result<HttpResponse, GitLabError> {
        let request = HttpRequest {
            url: url.into(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                (TOKEN_HEADER.to_string(), self.token.clone()),
            ],
        };

        tracing::debug!(url = %request.url, "GET");
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(GitLabError::from_status(response.status, &response.body));
        }

        Ok(response)
    }

    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, GitLabError> {
        serde_json::from_slice(&response.body).map_err(GitLabError::from)
    }

    /// Request the users endpoint once and return the value of the `X-Total` header.
    ///
    /// The body is decoded as a user list to confirm the response is usable,
    /// then discarded. Any integer is accepted, including zero and negative
    /// values.
    pub async fn count_users(&self) -> Result<i64, GitLabError> {
        let response = self.get(self.users_url(None)?).await?;
        let _: Vec<GitLabUser> = Self::decode(&response)?;

        let value = response
            .header(TOTAL_HEADER)
            .ok_or(GitLabError::MissingTotalHeader(TOTAL_HEADER))?;

        value
            .parse::<i64>()
            .map_err(|source| GitLabError::InvalidTotalHeader {
                header: TOTAL_HEADER,
                value: value.to_string(),
                source,
            })
    }

    /// Fetch one page of users (1-indexed, [`PER_PAGE`] per page).
    pub async fn list_users_page(&self, page: u64) -> Result<Vec<GitLabUser>, GitLabError> {
        let response = self.get(self.users_url(Some(page))?).await?;
        Self::decode(&response)
    }

    /// Fetch every user, page by page.
    ///
    /// The count request's total is used directly as the number of pages to
    /// request (`1..=total`, empty when `total <= 0`). The first failing page
    /// aborts the whole listing; later pages are never requested.
    pub async fn list_all_users(
        &self,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<Vec<GitLabUser>, GitLabError> {
        emit(on_progress, ExportProgress::CountingUsers);
        let total = self.count_users().await?;
        emit(on_progress, ExportProgress::CountedUsers { total });

        let pages = u64::try_from(total).unwrap_or(0);
        let mut users: Vec<GitLabUser> = Vec::new();
        for page in 1..=pages {
            let page_users = self.list_users_page(page).await?;
            let count = page_users.len();
            users.extend(page_users);

            emit(
                on_progress,
                ExportProgress::FetchedPage {
                    page,
                    count,
                    total_so_far: users.len(),
                    expected_pages: pages,
                },
            );
        }

        if i64::try_from(users.len()).ok() != Some(total) {
            tracing::warn!(
                reported = total,
                fetched = users.len(),
                "Fetched user count differs from {} header",
                TOTAL_HEADER
            );
        }

        emit(
            on_progress,
            ExportProgress::FetchComplete { total: users.len() },
        );

        Ok(users)
    }
}
