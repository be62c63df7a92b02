//! Test fixtures and data for sweep tests
//!
//! This module provides consistent test data used across all test suites.

use followsweep::Config;

/// Build an owned username list from literals
pub fn users(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Account under reconciliation
    pub const TARGET_ACCOUNT: &'static str = "testuser";

    /// Token with the shape of a real personal access token
    pub const TOKEN: &'static str = "ghp_test_token_123456789";

    /// Canonical following list: alice and charlie reciprocate,
    /// bob and david do not
    pub fn following() -> Vec<String> {
        users(&["alice", "bob", "charlie", "david"])
    }

    pub fn followers() -> Vec<String> {
        users(&["alice", "charlie", "eve"])
    }

    /// Expected targets for the canonical lists with no whitelist
    pub fn expected_targets() -> Vec<String> {
        users(&["bob", "david"])
    }

    /// Configuration with an empty whitelist
    pub fn config() -> Config {
        Self::config_with_whitelist(&[])
    }

    pub fn config_with_whitelist(whitelist: &[&str]) -> Config {
        Config {
            token: Self::TOKEN.to_string(),
            username: Self::TARGET_ACCOUNT.to_string(),
            whitelist: users(whitelist),
        }
    }
}
