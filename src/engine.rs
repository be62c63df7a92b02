//! Reconciliation engine
//!
//! Orchestrates the sweep as a linear pipeline: fetch both connection
//! lists, compute the whitelist-filtered target set, then unfollow the
//! targets strictly sequentially while tallying per-item outcomes. The
//! directory binding is injected so the engine can run against the real
//! GitHub client, a mock, or an in-memory stub.

use tracing::{info, warn};

use crate::core::lists::{exclude_listed, non_reciprocating};
use crate::error::SweepResult;
use crate::traits::AccountDirectory;
use crate::types::{Config, SweepOutcome, SweepPlan, UnfollowFailure};

/// Reconciles a following list against followers through an injected
/// account directory
pub struct SweepEngine<D>
where
    D: AccountDirectory,
{
    directory: D,
    config: Config,
}

impl<D> SweepEngine<D>
where
    D: AccountDirectory,
{
    /// Create a new engine with an injected directory binding
    pub fn new(directory: D, config: Config) -> Self {
        Self { directory, config }
    }

    /// Fetch both lists and compute the unfollow targets.
    ///
    /// The two fetches are issued concurrently; they are independent
    /// reads and completion order does not matter. The first failure
    /// short-circuits the run and no computation is attempted with a
    /// single list. Callers decide whether to continue to [`execute`]
    /// (dry run, empty plan, and declined confirmation all stop here).
    ///
    /// [`execute`]: SweepEngine::execute
    pub async fn plan(&self) -> SweepResult<SweepPlan> {
        let account = self.config.username.as_str();
        info!("fetching following and followers for {account}");

        let (following, followers) = tokio::try_join!(
            self.directory.list_following(account),
            self.directory.list_followers(account),
        )?;

        let candidates = non_reciprocating(&following, &followers);
        let targets = exclude_listed(&candidates, &self.config.whitelist);
        let whitelisted_count = candidates.len() - targets.len();

        info!(
            "computed {} unfollow targets from {} following / {} followers",
            targets.len(),
            following.len(),
            followers.len()
        );

        Ok(SweepPlan {
            following_count: following.len(),
            followers_count: followers.len(),
            whitelisted_count,
            targets,
        })
    }

    /// Unfollow every target, strictly sequentially and in plan order.
    ///
    /// Each call fully completes before the next begins; remote mutation
    /// APIs rate-limit and the batch gains nothing from concurrency. A
    /// failed call is recorded in the outcome and the batch continues, so
    /// one rate-limited or already-changed account never blocks the rest.
    /// Per-item failures never escape this method.
    pub async fn execute(&self, targets: &[String]) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();

        for username in targets {
            match self.directory.unfollow(username).await {
                Ok(()) => {
                    outcome.success_count += 1;
                    info!(
                        "unfollowed {username} ({}/{})",
                        outcome.attempted(),
                        targets.len()
                    );
                }
                Err(e) => {
                    let message = e.to_string();
                    warn!("{message}");
                    outcome.failures.push(UnfollowFailure {
                        username: username.clone(),
                        message,
                    });
                }
            }
        }

        outcome
    }
}
