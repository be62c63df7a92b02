//! Trait definitions with mockall annotations for testing
//!
//! The engine depends on the remote account directory only through the
//! trait below, so tests can substitute a mock or an in-memory stub for
//! the real GitHub binding.

use crate::error::SweepResult;

/// Remote account directory abstraction for dependency injection
///
/// Implementations translate each operation into the vendor API's actual
/// request, pagination, and error shape; callers always receive fully
/// flattened lists. Usernames are compared by exact string equality even
/// though GitHub treats logins as case-insensitive for some operations.
#[mockall::automock]
#[async_trait::async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Full list of accounts that `account` follows
    ///
    /// # Returns
    /// The flattened following list in API order, or `RemoteFetch` when
    /// the underlying transport or API call errors.
    async fn list_following(&self, account: &str) -> SweepResult<Vec<String>>;

    /// Full list of accounts following `account`
    async fn list_followers(&self, account: &str) -> SweepResult<Vec<String>>;

    /// Unfollow a single account on behalf of the authenticated user
    ///
    /// Idempotency is the remote system's concern: unfollowing an account
    /// that is already not followed is not treated as a local error here.
    async fn unfollow(&self, account: &str) -> SweepResult<()>;
}
