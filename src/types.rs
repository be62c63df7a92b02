//! Data types shared across the sweep pipeline

/// Validated, immutable run configuration
///
/// Constructed once per run by [`crate::services::config`] and never
/// mutated. Invariant: `token` and `username` are non-empty.
#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token used to authenticate API calls
    pub token: String,
    /// Account whose following/followers lists are reconciled
    pub username: String,
    /// Usernames never selected for unfollowing; defaults to empty
    pub whitelist: Vec<String>,
}

/// Result of the compute phase
///
/// An immutable snapshot of what was fetched and what would be
/// unfollowed. Callers may stop here (dry run, declined confirmation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    pub following_count: usize,
    pub followers_count: usize,
    /// Candidates removed by the whitelist
    pub whitelisted_count: usize,
    /// Accounts to unfollow, in following-list order
    pub targets: Vec<String>,
}

impl SweepPlan {
    /// True when there is nothing to unfollow
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A single unfollow call that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfollowFailure {
    pub username: String,
    pub message: String,
}

/// Tally of the execution phase
///
/// Accumulated while the batch runs; per-item failures are recorded here
/// and never abort the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    pub success_count: usize,
    /// Failed unfollow calls, in attempt order
    pub failures: Vec<UnfollowFailure>,
}

impl SweepOutcome {
    /// Number of targets attempted so far
    pub fn attempted(&self) -> usize {
        self.success_count + self.failures.len()
    }
}
