//! Simple replica placement strategy.
//!
//! Places up to RF replicas clockwise from each token, the way a
//! single-datacenter placement walk does.
//!
//! # Algorithm
//!
//! For a token `t` owned by node `P`, the set starts as `[P]` and the walk
//! issues successor queries from `t`:
//!
//! 1. A candidate whose node is not yet in the set is appended.
//! 2. *Eager secondary promotion* (toggleable, default on): right after
//!    appending a candidate, if the placement map already holds a set of
//!    size >= 2 for the candidate's own token and the current set still has
//!    fewer than RF members, the candidate's secondary is appended too (when
//!    unseen). The walk cursor does not move for the promotion.
//! 3. Stop at RF distinct members, or after one full revolution when the
//!    cluster has fewer than RF nodes.
//!
//! The promotion reads whatever the placement map holds mid-pass: freshly
//! rewritten sets below the cursor, and sets surviving from the previous
//! pass above it. Which combinations of nodes end up co-occurring under this
//! rule is the quantity the simulation measures, so the walk must not be
//! simplified.

use corelib::{NodeId, Token, TokenRing};
use tracing::trace;

use crate::error::{ReplicationError, Result};
use crate::placement::{PlacementMap, ReplicaSet};
use crate::strategy::ReplicationStrategy;

/// Clockwise-walk placement with eager secondary promotion.
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    replication_factor: usize,
    eager_secondary: bool,
}

impl SimpleStrategy {
    /// Create a strategy with the promotion heuristic enabled.
    pub fn new(replication_factor: usize) -> Self {
        Self {
            replication_factor,
            eager_secondary: true,
        }
    }

    /// Toggle the secondary-promotion heuristic.
    pub fn with_eager_secondary(mut self, enabled: bool) -> Self {
        self.eager_secondary = enabled;
        self
    }

    pub fn eager_secondary(&self) -> bool {
        self.eager_secondary
    }

    /// Build the replica set for one token.
    ///
    /// `placement` is the map the current pass is rewriting; the promotion
    /// step reads already-present sets out of it.
    fn replica_set_for(
        &self,
        ring: &TokenRing,
        token: Token,
        primary: NodeId,
        placement: &PlacementMap,
    ) -> Result<ReplicaSet> {
        let mut set = ReplicaSet::new(primary);
        let mut cursor = token;

        // One revolution visits every token; that bounds the walk when the
        // cluster has fewer distinct nodes than the replication factor.
        for _ in 0..ring.token_count() {
            if set.len() >= self.replication_factor {
                break;
            }
            let candidate = ring.successor(cursor)?;
            cursor = candidate.token;

            if set.contains(candidate.node_id) {
                continue;
            }
            set.push(candidate.node_id);

            if self.eager_secondary && set.len() < self.replication_factor {
                // Promote the candidate's own secondary, when its token
                // already has a computed set.
                let promoted = placement
                    .get(candidate.token)
                    .and_then(ReplicaSet::secondary);
                if let Some(secondary) = promoted {
                    if !set.contains(secondary) {
                        set.push(secondary);
                    }
                }
            }
        }

        Ok(set)
    }
}

impl ReplicationStrategy for SimpleStrategy {
    fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    fn update_placement(&self, ring: &TokenRing, placement: &mut PlacementMap) -> Result<()> {
        if ring.token_count() == 0 {
            return Err(ReplicationError::EmptyRing);
        }

        for vnode in ring.vnodes() {
            let set = self.replica_set_for(ring, vnode.token, vnode.node_id, placement)?;
            placement.insert(vnode.token, set);
        }

        trace!(
            tokens = placement.len(),
            groups = placement.distinct_group_count(),
            "placement pass complete"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::TokenSpace;

    const A: NodeId = NodeId(1);
    const B: NodeId = NodeId(2);
    const C: NodeId = NodeId(3);
    const D: NodeId = NodeId(4);

    /// 10 -> A, 40 -> B, 70 -> C over a domain of 100.
    fn ring_abc() -> TokenRing {
        let mut ring = TokenRing::new(TokenSpace::new(100));
        ring.register_token(Token(10), A).unwrap();
        ring.register_token(Token(40), B).unwrap();
        ring.register_token(Token(70), C).unwrap();
        ring
    }

    #[test]
    fn test_three_nodes_one_group() {
        let ring = ring_abc();
        let strategy = SimpleStrategy::new(3);
        let mut placement = PlacementMap::new();
        strategy.update_placement(&ring, &mut placement).unwrap();

        assert_eq!(placement.len(), 3);
        assert_eq!(
            placement.get(Token(10)).unwrap().members(),
            &[A, B, C],
            "walk order from token 10"
        );
        // Every token's group has the same three members.
        assert_eq!(placement.distinct_group_count(), 1);
    }

    #[test]
    fn test_empty_ring_is_a_misuse() {
        let ring = TokenRing::new(TokenSpace::new(100));
        let strategy = SimpleStrategy::new(3);
        let mut placement = PlacementMap::new();
        assert_eq!(
            strategy.update_placement(&ring, &mut placement),
            Err(ReplicationError::EmptyRing)
        );
    }

    #[test]
    fn test_fewer_nodes_than_rf_returns_all_of_them() {
        let mut ring = TokenRing::new(TokenSpace::new(100));
        ring.register_token(Token(10), A).unwrap();
        ring.register_token(Token(60), B).unwrap();

        let strategy = SimpleStrategy::new(3);
        let mut placement = PlacementMap::new();
        strategy.update_placement(&ring, &mut placement).unwrap();

        assert_eq!(placement.get(Token(10)).unwrap().members(), &[A, B]);
    }

    #[test]
    fn test_rf_one_is_just_the_primary() {
        let ring = ring_abc();
        let strategy = SimpleStrategy::new(1);
        let mut placement = PlacementMap::new();
        strategy.update_placement(&ring, &mut placement).unwrap();

        for (token, set) in placement.iter() {
            assert_eq!(set.members(), &[ring.primary(token).unwrap()]);
        }
        assert_eq!(placement.distinct_group_count(), 3);
    }

    #[test]
    fn test_new_node_interposes_into_existing_sets() {
        // Add D at 55, between B (40) and C (70): token 40's walk now meets
        // D before C, so its set must pick up D.
        let mut ring = ring_abc();
        let strategy = SimpleStrategy::new(3);
        let mut placement = PlacementMap::new();
        strategy.update_placement(&ring, &mut placement).unwrap();

        ring.register_token(Token(55), D).unwrap();
        strategy.update_placement(&ring, &mut placement).unwrap();

        let at_40 = placement.get(Token(40)).unwrap();
        assert!(at_40.contains(D));
        assert_eq!(at_40.members(), &[B, D, C]);
    }

    #[test]
    fn test_promotion_reads_stale_sets_from_previous_pass() {
        // After D joins at 55, token 10's walk appends B (40) and would next
        // reach D (55). With promotion on, B's set from the *previous* pass
        // ([B, C, A]) still sits at token 40 mid-pass, so its secondary C is
        // pulled in instead and the set closes as {A, B, C}.
        let mut ring = ring_abc();
        let strategy = SimpleStrategy::new(3);
        let mut placement = PlacementMap::new();
        strategy.update_placement(&ring, &mut placement).unwrap();
        assert_eq!(placement.get(Token(40)).unwrap().members(), &[B, C, A]);

        ring.register_token(Token(55), D).unwrap();
        strategy.update_placement(&ring, &mut placement).unwrap();

        assert_eq!(placement.get(Token(10)).unwrap().members(), &[A, B, C]);
    }

    #[test]
    fn test_heuristic_toggle_changes_group_counts() {
        // Identical token layout, heuristic on vs. off. With promotion the
        // walk from token 10 closes on the stale secondary C; without it the
        // walk reaches D. The group populations differ: 3 vs. 4.
        let run = |eager: bool| {
            let mut ring = ring_abc();
            let strategy = SimpleStrategy::new(3).with_eager_secondary(eager);
            let mut placement = PlacementMap::new();
            strategy.update_placement(&ring, &mut placement).unwrap();
            ring.register_token(Token(55), D).unwrap();
            strategy.update_placement(&ring, &mut placement).unwrap();
            placement
        };

        let with_promotion = run(true);
        let without_promotion = run(false);

        assert_eq!(
            with_promotion.get(Token(10)).unwrap().members(),
            &[A, B, C]
        );
        assert_eq!(
            without_promotion.get(Token(10)).unwrap().members(),
            &[A, B, D]
        );
        assert_eq!(with_promotion.distinct_group_count(), 3);
        assert_eq!(without_promotion.distinct_group_count(), 4);
    }

    #[test]
    fn test_pass_is_deterministic() {
        let mut ring = ring_abc();
        ring.register_token(Token(55), D).unwrap();

        let strategy = SimpleStrategy::new(3);
        let mut first = PlacementMap::new();
        strategy.update_placement(&ring, &mut first).unwrap();

        // Same (ring, placement) inputs, same outputs.
        let mut second = first.clone();
        let mut third = first.clone();
        strategy.update_placement(&ring, &mut second).unwrap();
        strategy.update_placement(&ring, &mut third).unwrap();
        assert_eq!(second, third);
    }
}
