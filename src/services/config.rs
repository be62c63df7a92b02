//! Environment variable configuration loading
//!
//! Configuration is read from the process environment, with a `.env`
//! file in the current directory or a parent loaded first if present.
//! Environment variables take precedence over `.env` values.
//!
//! ## Required
//! - `GITHUB_TOKEN`: personal access token with the `user:follow` scope
//! - `GITHUB_USERNAME`: account whose lists are reconciled
//!
//! ## Optional
//! - `WHITELIST`: comma-separated usernames that are never unfollowed

use crate::core::lists::parse_delimited_list;
use crate::error::{SweepError, SweepResult};
use crate::types::Config;

/// Guidance printed alongside configuration errors
pub const ENV_GUIDANCE: &str = "\
Required environment variables:
  GITHUB_TOKEN     GitHub personal access token (user:follow scope)
  GITHUB_USERNAME  GitHub username to reconcile
  WHITELIST        optional comma-separated usernames to keep following";

impl Config {
    /// Validate raw configuration parts into an immutable [`Config`].
    ///
    /// Pure with respect to the environment, so the validation rules are
    /// testable without touching process-global state. A missing or empty
    /// token or username is rejected; a missing whitelist is an empty one.
    pub fn from_parts(
        token: Option<String>,
        username: Option<String>,
        whitelist_raw: Option<String>,
    ) -> SweepResult<Self> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SweepError::Configuration {
                message: "GITHUB_TOKEN is not set".to_string(),
            })?;
        let username = username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| SweepError::Configuration {
                message: "GITHUB_USERNAME is not set".to_string(),
            })?;
        let whitelist = parse_delimited_list(whitelist_raw.as_deref().unwrap_or(""));

        Ok(Self {
            token,
            username,
            whitelist,
        })
    }
}

/// Load configuration from the environment.
///
/// Loads `.env` first when one exists; a missing `.env` file is silently
/// ignored.
pub fn load_config() -> SweepResult<Config> {
    let _ = dotenv::dotenv();

    Config::from_parts(
        std::env::var("GITHUB_TOKEN").ok(),
        std::env::var("GITHUB_USERNAME").ok(),
        std::env::var("WHITELIST").ok(),
    )
}
