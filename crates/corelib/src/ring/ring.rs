//! Token ring data structure.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{Node, NodeId};
use crate::token::{Token, TokenSpace};
use crate::vnode::VirtualNode;

/// The sorted token -> primary owner mapping for one simulation run.
///
/// All state is owned by the instance; nothing is shared across rings or
/// runs. The `BTreeMap` keeps the token domain sorted at all times, so
/// successor queries are always consistent with the registered token set.
///
/// # Invariants
///
/// - No two registered tokens are equal.
/// - `token_count() == Σ` vnodes over all fully generated nodes.
#[derive(Debug, Clone)]
pub struct TokenRing {
    space: TokenSpace,
    /// token -> primary owner.
    tokens: BTreeMap<Token, NodeId>,
    /// Registry of cluster members.
    nodes: BTreeMap<NodeId, Node>,
}

impl TokenRing {
    /// Create an empty ring over the given token domain.
    pub fn new(space: TokenSpace) -> Self {
        Self {
            space,
            tokens: BTreeMap::new(),
            nodes: BTreeMap::new(),
        }
    }

    pub fn token_space(&self) -> TokenSpace {
        self.space
    }

    /// True if `token` is registered on the ring.
    pub fn contains_token(&self, token: Token) -> bool {
        self.tokens.contains_key(&token)
    }

    /// Register `token` as owned by `node_id`.
    ///
    /// Rejects tokens outside the domain and tokens that already have an
    /// owner; ownership is never silently reassigned.
    pub fn register_token(&mut self, token: Token, node_id: NodeId) -> Result<()> {
        if !self.space.contains(token) {
            return Err(Error::InvalidToken(format!(
                "{} outside domain [0, {})",
                token,
                self.space.token_max()
            )));
        }
        if self.tokens.contains_key(&token) {
            return Err(Error::DuplicateToken(token));
        }
        self.tokens.insert(token, node_id);
        Ok(())
    }

    /// Record a node in the registry.
    ///
    /// Token ownership is registered separately (see
    /// [`Node::generate_tokens`](crate::node::Node::generate_tokens) and
    /// [`register_token`](Self::register_token)); a node with zero vnodes
    /// sits in the registry without owning any position.
    pub fn add_node(&mut self, node: Node) {
        debug!(node = %node.id, vnodes = node.tokens().len(), "added node to ring");
        self.nodes.insert(node.id, node);
    }

    /// Return the first registered vnode strictly clockwise of `token`,
    /// wrapping to the smallest token when nothing greater exists.
    ///
    /// Fails with [`Error::EmptyRing`] when no tokens are registered; that is
    /// an API misuse and callers are expected to abort.
    pub fn successor(&self, token: Token) -> Result<VirtualNode> {
        self.tokens
            .range((Excluded(token), Unbounded))
            .next()
            .or_else(|| self.tokens.iter().next())
            .map(|(&t, &owner)| VirtualNode::new(t, owner))
            .ok_or(Error::EmptyRing)
    }

    /// Primary owner of `token`, if registered.
    pub fn primary(&self, token: Token) -> Option<NodeId> {
        self.tokens.get(&token).copied()
    }

    /// All registered vnodes in ascending token order.
    pub fn vnodes(&self) -> impl Iterator<Item = VirtualNode> + '_ {
        self.tokens.iter().map(|(&t, &n)| VirtualNode::new(t, n))
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }
}
