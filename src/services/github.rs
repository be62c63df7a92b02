//! GitHub REST binding of the account directory port
//!
//! Connection lists are paginated by the API; this binding walks the
//! pages and hands the engine a single flattened list, per the port
//! contract. No retry or backoff happens at this layer.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ListKind, SweepError, SweepResult};
use crate::traits::AccountDirectory;

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("followsweep/", env!("CARGO_PKG_VERSION"));
const PER_PAGE: usize = 100;

/// The slice of the GitHub user object we care about
#[derive(Debug, Deserialize)]
struct AccountSummary {
    login: String,
}

/// Account directory backed by the GitHub REST API
pub struct GithubDirectory {
    client: reqwest::Client,
    token: String,
}

impl GithubDirectory {
    /// Create a directory binding authenticated with a personal access token
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
        }
    }

    /// Extract the GitHub error-body `message` field, falling back to the
    /// status line when the body is not the usual error shape
    async fn error_cause(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(|m| m.as_str())
                .map(|m| format!("{status}: {m}"))
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        }
    }

    /// Fetch one connection list, following pagination until a short page
    async fn fetch_list(&self, list: ListKind, account: &str) -> SweepResult<Vec<String>> {
        let path = match list {
            ListKind::Following => "following",
            ListKind::Followers => "followers",
        };

        let fetch_error = |cause: String| SweepError::RemoteFetch {
            list,
            account: account.to_string(),
            cause,
        };

        let mut logins = Vec::new();
        let mut page = 1usize;

        loop {
            let response = self
                .client
                .get(format!("{API_BASE}/users/{account}/{path}"))
                .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())])
                .header("Authorization", format!("Bearer {}", self.token))
                .header("Accept", "application/vnd.github+json")
                .header("User-Agent", USER_AGENT)
                .send()
                .await
                .map_err(|e| fetch_error(e.to_string()))?;

            if !response.status().is_success() {
                return Err(fetch_error(Self::error_cause(response).await));
            }

            let batch: Vec<AccountSummary> = response
                .json()
                .await
                .map_err(|e| fetch_error(format!("failed to parse response: {e}")))?;

            let batch_len = batch.len();
            logins.extend(batch.into_iter().map(|a| a.login));

            // A short page is the last page
            if batch_len < PER_PAGE {
                return Ok(logins);
            }
            page += 1;
        }
    }
}

#[async_trait]
impl AccountDirectory for GithubDirectory {
    async fn list_following(&self, account: &str) -> SweepResult<Vec<String>> {
        self.fetch_list(ListKind::Following, account).await
    }

    async fn list_followers(&self, account: &str) -> SweepResult<Vec<String>> {
        self.fetch_list(ListKind::Followers, account).await
    }

    async fn unfollow(&self, account: &str) -> SweepResult<()> {
        let response = self
            .client
            .delete(format!("{API_BASE}/user/following/{account}"))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| SweepError::RemoteMutation {
                username: account.to_string(),
                cause: e.to_string(),
            })?;

        // GitHub answers 204; accept any 2xx rather than pinning the exact code
        if !response.status().is_success() {
            return Err(SweepError::RemoteMutation {
                username: account.to_string(),
                cause: Self::error_cause(response).await,
            });
        }

        Ok(())
    }
}
