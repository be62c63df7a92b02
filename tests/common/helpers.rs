//! In-memory stub directory for pipeline tests
//!
//! The stub serves fixed lists and records every unfollow call in order,
//! with injectable per-user and fetch failures. Tests keep a handle on
//! the call log before handing the stub to the engine.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use followsweep::{AccountDirectory, ListKind, SweepError, SweepResult};

/// Stub binding over fixed in-memory lists
pub struct StubDirectory {
    following: Vec<String>,
    followers: Vec<String>,
    /// Usernames whose unfollow call fails
    failing: HashSet<String>,
    /// When set, fail fetches of this list outright
    fail_fetch: Option<ListKind>,
    /// Every unfollow call, in order
    unfollowed: Arc<Mutex<Vec<String>>>,
}

impl StubDirectory {
    pub fn new(following: Vec<String>, followers: Vec<String>) -> Self {
        Self {
            following,
            followers,
            failing: HashSet::new(),
            fail_fetch: None,
            unfollowed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make unfollow calls for these usernames fail
    pub fn with_failing(mut self, usernames: &[&str]) -> Self {
        self.failing = usernames.iter().map(|u| u.to_string()).collect();
        self
    }

    /// Make fetches of the given list fail with a transport error
    pub fn with_fetch_failure(mut self, list: ListKind) -> Self {
        self.fail_fetch = Some(list);
        self
    }

    /// Handle on the unfollow call log, valid after the stub moves into
    /// the engine
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.unfollowed)
    }
}

#[async_trait]
impl AccountDirectory for StubDirectory {
    async fn list_following(&self, account: &str) -> SweepResult<Vec<String>> {
        if self.fail_fetch == Some(ListKind::Following) {
            return Err(SweepError::RemoteFetch {
                list: ListKind::Following,
                account: account.to_string(),
                cause: "stub transport error".to_string(),
            });
        }
        Ok(self.following.clone())
    }

    async fn list_followers(&self, account: &str) -> SweepResult<Vec<String>> {
        if self.fail_fetch == Some(ListKind::Followers) {
            return Err(SweepError::RemoteFetch {
                list: ListKind::Followers,
                account: account.to_string(),
                cause: "stub transport error".to_string(),
            });
        }
        Ok(self.followers.clone())
    }

    async fn unfollow(&self, account: &str) -> SweepResult<()> {
        self.unfollowed
            .lock()
            .expect("call log lock poisoned")
            .push(account.to_string());

        if self.failing.contains(account) {
            return Err(SweepError::RemoteMutation {
                username: account.to_string(),
                cause: "API rate limit exceeded".to_string(),
            });
        }
        Ok(())
    }
}
