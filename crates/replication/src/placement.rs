//! Replica sets and their canonical identity.
//!
//! A replica set records the walk order its members were found in (primary
//! first), but two sets with the same members are the same *group* no matter
//! how they were ordered. The canonical identity is therefore a sorted list
//! of member ids, never the iteration order of an unordered container.

use std::collections::{BTreeMap, HashSet};

use corelib::{NodeId, Token};
use serde::Serialize;

/// Canonical, order-independent identity of a replica group.
pub type GroupIdentity = Vec<NodeId>;

/// The replica group for one token.
///
/// Members are distinct node ids in walk order; the first is the token's
/// primary, the second (when present) is its secondary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplicaSet {
    members: Vec<NodeId>,
}

impl ReplicaSet {
    /// Start a set containing only the token's primary.
    pub fn new(primary: NodeId) -> Self {
        Self {
            members: vec![primary],
        }
    }

    pub fn primary(&self) -> NodeId {
        self.members[0]
    }

    /// Second-ranked member, when the set has one. By construction this is
    /// always the first distinct node clockwise of the set's token at the
    /// time the set was computed.
    pub fn secondary(&self) -> Option<NodeId> {
        self.members.get(1).copied()
    }

    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    /// Append a member. Callers keep the distinctness invariant.
    pub fn push(&mut self, id: NodeId) {
        debug_assert!(!self.contains(id), "replica set members must be distinct");
        self.members.push(id);
    }

    /// Sorted member ids; equal groups produce equal identities regardless
    /// of primary or walk order.
    pub fn identity(&self) -> GroupIdentity {
        let mut ids = self.members.clone();
        ids.sort_unstable();
        ids
    }
}

/// token -> replica set for every registered token.
///
/// The map outlives individual recomputation passes: a pass rewrites entries
/// token by token, and entries not yet rewritten keep the value from the
/// previous pass. The assignment heuristic depends on observing exactly that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementMap {
    sets: BTreeMap<Token, ReplicaSet>,
}

impl PlacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, token: Token) -> Option<&ReplicaSet> {
        self.sets.get(&token)
    }

    pub fn insert(&mut self, token: Token, set: ReplicaSet) {
        self.sets.insert(token, set);
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// All (token, replica set) entries in ascending token order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &ReplicaSet)> {
        self.sets.iter().map(|(&t, s)| (t, s))
    }

    /// Number of distinct replica-group identities across all tokens.
    pub fn distinct_group_count(&self) -> usize {
        let groups: HashSet<GroupIdentity> =
            self.sets.values().map(ReplicaSet::identity).collect();
        groups.len()
    }

    /// The distinct group identities themselves, sorted. Diagnostic only;
    /// the simulation reports counts.
    pub fn distinct_groups(&self) -> Vec<GroupIdentity> {
        let mut groups: Vec<GroupIdentity> = self
            .sets
            .values()
            .map(ReplicaSet::identity)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        groups.sort();
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_walk_order() {
        let mut a = ReplicaSet::new(NodeId(3));
        a.push(NodeId(1));
        a.push(NodeId(2));

        let mut b = ReplicaSet::new(NodeId(1));
        b.push(NodeId(2));
        b.push(NodeId(3));

        assert_ne!(a, b);
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn test_distinct_count_uses_identity() {
        let mut map = PlacementMap::new();

        let mut a = ReplicaSet::new(NodeId(1));
        a.push(NodeId(2));
        let mut b = ReplicaSet::new(NodeId(2));
        b.push(NodeId(1));
        let mut c = ReplicaSet::new(NodeId(1));
        c.push(NodeId(3));

        map.insert(Token(10), a);
        map.insert(Token(20), b);
        map.insert(Token(30), c);

        // {1,2} twice and {1,3} once.
        assert_eq!(map.distinct_group_count(), 2);
        assert_eq!(
            map.distinct_groups(),
            vec![vec![NodeId(1), NodeId(2)], vec![NodeId(1), NodeId(3)]]
        );
    }

    #[test]
    fn test_secondary_of_singleton_is_none() {
        let set = ReplicaSet::new(NodeId(1));
        assert_eq!(set.secondary(), None);
        assert_eq!(set.primary(), NodeId(1));
    }
}
