//! Token abstractions for the ring.
//!
//! Tokens are integer positions in a bounded domain `[0, token_max)`. Unlike
//! a hash-partitioned ring they are not derived from keys: the simulation
//! draws them uniformly at random, so the domain is sized to make collisions
//! rare but never impossible.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A position on the ring.
///
/// Newtype over `u64` so tokens are cheap to compare, hash and copy.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Token(pub u64);

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The bounded integer domain tokens are drawn from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TokenSpace {
    token_max: u64,
}

impl TokenSpace {
    /// Default domain size, large enough that collisions stay rare at the
    /// default scale (hundreds of nodes at 256 vnodes each).
    pub const DEFAULT_TOKEN_MAX: u64 = 1_000_000_000;

    /// Create a domain covering `[0, token_max)`.
    pub fn new(token_max: u64) -> Self {
        Self { token_max }
    }

    pub fn token_max(&self) -> u64 {
        self.token_max
    }

    /// True if `token` lies inside the domain.
    pub fn contains(&self, token: Token) -> bool {
        token.0 < self.token_max
    }

    /// Draw a uniformly random token from the domain.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Token {
        Token(rng.random_range(0..self.token_max))
    }
}

impl Default for TokenSpace {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOKEN_MAX)
    }
}
