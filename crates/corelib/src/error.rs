//! Error types for the core library.

use thiserror::Error;

use crate::token::Token;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Successor query against a ring with no registered tokens.
    #[error("ring has no tokens")]
    EmptyRing,
    /// Token outside the ring's domain.
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// Attempt to register a token that already has an owner.
    #[error("token {0} is already registered")]
    DuplicateToken(Token),
    /// Rejection sampling could not find enough free tokens.
    #[error("token space exhausted: {needed} more free tokens needed in a domain of {domain}")]
    TokenSpaceExhausted { needed: usize, domain: u64 },
    /// Invalid node configuration.
    #[error("invalid node: {0}")]
    InvalidNode(String),
}
