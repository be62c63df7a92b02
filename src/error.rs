//! Sweep-specific error types

use thiserror::Error;

/// Result type for sweep operations
pub type SweepResult<T> = Result<T, SweepError>;

/// Which remote connection list a fetch was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Following,
    Followers,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Following => write!(f, "following"),
            ListKind::Followers => write!(f, "followers"),
        }
    }
}

/// Sweep error taxonomy
///
/// `Configuration` and `RemoteFetch` are fatal and propagate to the top
/// level. `RemoteMutation` is produced by the directory binding but caught
/// inside the engine's execute loop and recorded per item.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to fetch {list} list for {account}: {cause}")]
    RemoteFetch {
        list: ListKind,
        account: String,
        cause: String,
    },

    #[error("Failed to unfollow {username}: {cause}")]
    RemoteMutation { username: String, cause: String },
}
