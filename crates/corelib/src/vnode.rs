//! Virtual node abstractions.
//!
//! A virtual node is one registered (token, owner) pair on the ring. Each
//! physical node contributes many of them, which smooths ownership across the
//! token domain. Successor queries answer in terms of virtual nodes.

use std::fmt;

use crate::node::NodeId;
use crate::token::Token;

/// A virtual node on the ring.
///
/// # Invariants
///
/// - Every `VirtualNode` has a unique token (enforced at registration).
/// - Every `VirtualNode` belongs to exactly one physical node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualNode {
    /// Token position on the ring.
    pub token: Token,
    /// The physical node that owns this position.
    pub node_id: NodeId,
}

impl VirtualNode {
    #[inline]
    pub fn new(token: Token, node_id: NodeId) -> Self {
        Self { token, node_id }
    }

    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    #[inline]
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }
}

impl fmt::Display for VirtualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VNode(token={}, node={})", self.token, self.node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnode_ordering_follows_token() {
        let a = VirtualNode::new(Token(100), NodeId(2));
        let b = VirtualNode::new(Token(200), NodeId(1));
        assert!(a < b);
    }
}
