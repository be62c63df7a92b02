//! Library for reconciling a GitHub following list against followers
//!
//! This library computes which followed accounts do not follow back,
//! filters an explicit whitelist, and unfollows the rest one call at a
//! time through an injected directory binding. The pure set computations
//! live in [`core`], the orchestration in [`engine`], and the real GitHub
//! binding in [`services`].

pub mod core;
pub mod engine;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use engine::SweepEngine;
pub use error::{ListKind, SweepError, SweepResult};
pub use traits::AccountDirectory;
pub use types::{Config, SweepOutcome, SweepPlan, UnfollowFailure};
