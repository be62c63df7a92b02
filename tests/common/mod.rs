//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the sweep test suites.

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::{users, TestFixtures};
pub use helpers::StubDirectory;
