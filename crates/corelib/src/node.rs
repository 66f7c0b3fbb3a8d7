//! Node abstractions for the ring.
//!
//! Nodes represent cluster members. They are identified by a compact `NodeId`
//! that is cheap to compare and hash, and each node owns a fixed number of
//! token positions (vnodes) generated by rejection sampling against the ring.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ring::TokenRing;
use crate::token::Token;

/// Default number of vnodes a node contributes to the ring.
pub const DEFAULT_NUM_TOKENS: usize = 256;

/// Retry budget for rejection sampling, per requested token. Generous at any
/// sane domain size; only exceeded when the domain is too small for the
/// total vnode demand.
const SAMPLE_RETRIES_PER_TOKEN: usize = 64;

/// Compact identifier for a node in the cluster.
///
/// Newtype over `u128` so comparisons and hashing are very fast while giving
/// plenty of space for uniqueness.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(pub u128);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Logical node participating in the ring.
///
/// Carries the node's identity, its configured vnode count, and the tokens it
/// ended up owning. Keep this struct cheap to clone; placement state lives in
/// the ring and the placement map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Human-readable name.
    pub name: String,
    /// Number of vnodes this node generates. Zero is allowed: such a node
    /// never becomes a primary and never appears in any replica set.
    num_tokens: usize,
    /// Tokens owned by this node, sorted once generation completes.
    tokens: Vec<Token>,
}

impl Node {
    /// Construct a node with the default vnode count.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self::with_num_tokens(id, name, DEFAULT_NUM_TOKENS)
    }

    /// Construct a node with an explicit vnode count.
    pub fn with_num_tokens(id: NodeId, name: impl Into<String>, num_tokens: usize) -> Self {
        Self {
            id,
            name: name.into(),
            num_tokens,
            tokens: Vec::with_capacity(num_tokens),
        }
    }

    pub fn num_tokens(&self) -> usize {
        self.num_tokens
    }

    /// Tokens owned by this node, in ascending order once generated.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Generate this node's tokens and register them on the ring.
    ///
    /// Draws uniformly random tokens from the ring's domain and skips any
    /// already registered anywhere on the ring, until `num_tokens` distinct
    /// positions are owned. Collisions are expected and resampled; they never
    /// surface to the caller. The retry budget bounds the loop: exceeding it
    /// means the domain is too small for the demand and generation fails with
    /// [`Error::TokenSpaceExhausted`].
    pub fn generate_tokens<R: Rng + ?Sized>(
        &mut self,
        ring: &mut TokenRing,
        rng: &mut R,
    ) -> Result<()> {
        if !self.tokens.is_empty() {
            return Err(Error::InvalidNode(format!(
                "node {} already generated its tokens",
                self.id
            )));
        }

        let space = ring.token_space();
        let budget = SAMPLE_RETRIES_PER_TOKEN * self.num_tokens.max(1);
        let mut draws = 0;

        while self.tokens.len() < self.num_tokens {
            if draws >= budget {
                return Err(Error::TokenSpaceExhausted {
                    needed: self.num_tokens - self.tokens.len(),
                    domain: space.token_max(),
                });
            }
            draws += 1;

            let token = space.sample(rng);
            if ring.contains_token(token) {
                // Collision with an existing vnode; draw again.
                continue;
            }
            ring.register_token(token, self.id)?;
            self.tokens.push(token);
        }

        self.tokens.sort_unstable();
        Ok(())
    }
}
