//! Error types for replica placement.

use thiserror::Error;

/// Result type alias for the replication crate.
pub type Result<T> = std::result::Result<T, ReplicationError>;

/// Errors that can occur while computing replica placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    /// A ring query failed underneath the placement pass.
    #[error(transparent)]
    Ring(#[from] corelib::Error),
    /// Placement requested before any token was registered. Misuse of the
    /// API; bootstrap the cluster first.
    #[error("no tokens registered; bootstrap the cluster before computing placement")]
    EmptyRing,
}
