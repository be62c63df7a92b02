//! Service implementations
//!
//! This module contains the real implementations behind the engine's
//! collaborator seams: environment-based configuration loading and the
//! GitHub binding of the account directory port.

pub mod config;
pub mod github;

#[cfg(test)]
mod tests;

// Re-export the service entry points
pub use config::load_config;
pub use github::GithubDirectory;
