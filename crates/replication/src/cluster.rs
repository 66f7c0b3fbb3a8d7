//! Cluster simulation state.
//!
//! A `Cluster` owns one ring, one placement map, the strategy and the seeded
//! RNG for a single run. Nothing is shared across runs: dropping the cluster
//! drops the whole simulation state.

use corelib::{Node, NodeId, TokenRing, TokenSpace, DEFAULT_NUM_TOKENS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::placement::PlacementMap;
use crate::strategy::{ReplicationStrategy, SimpleStrategy};

/// Configuration for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Target replica-group size. Also the bootstrap node count.
    pub replication_factor: usize,
    /// Vnodes generated per node.
    pub num_tokens: usize,
    /// Size of the token domain `[0, token_max)`.
    pub token_max: u64,
    /// Secondary-promotion heuristic toggle.
    pub eager_secondary: bool,
    /// RNG seed; a fixed seed makes the whole run reproducible.
    pub seed: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            replication_factor: 3,
            num_tokens: DEFAULT_NUM_TOKENS,
            token_max: TokenSpace::DEFAULT_TOKEN_MAX,
            eager_secondary: true,
            seed: 0,
        }
    }
}

/// One simulated cluster: ring, placement and the node-addition machinery.
///
/// Each node addition triggers a full placement recomputation over all
/// tokens. That is quadratic in final cluster size and fine at the intended
/// scale; the recomputation itself lives behind [`ReplicationStrategy`], so
/// an incremental variant could be swapped in without changing behavior.
pub struct Cluster<S: ReplicationStrategy = SimpleStrategy> {
    ring: TokenRing,
    strategy: S,
    placement: PlacementMap,
    num_tokens: usize,
    rng: StdRng,
    next_node: u128,
}

impl Cluster<SimpleStrategy> {
    /// Bootstrap a cluster with the simple strategy.
    ///
    /// Creates and registers `replication_factor` nodes before the first
    /// placement pass, so the first assignment always finds enough distinct
    /// candidates.
    pub fn bootstrap(config: &ClusterConfig) -> Result<Self> {
        let strategy = SimpleStrategy::new(config.replication_factor)
            .with_eager_secondary(config.eager_secondary);
        Self::bootstrap_with(config, strategy)
    }
}

impl<S: ReplicationStrategy> Cluster<S> {
    /// Bootstrap with an explicit strategy.
    pub fn bootstrap_with(config: &ClusterConfig, strategy: S) -> Result<Self> {
        let mut cluster = Self {
            ring: TokenRing::new(TokenSpace::new(config.token_max)),
            strategy,
            placement: PlacementMap::new(),
            num_tokens: config.num_tokens,
            rng: StdRng::seed_from_u64(config.seed),
            next_node: 0,
        };

        for _ in 0..cluster.strategy.replication_factor() {
            cluster.register_node()?;
        }
        cluster
            .strategy
            .update_placement(&cluster.ring, &mut cluster.placement)?;

        debug!(
            nodes = cluster.ring.node_count(),
            tokens = cluster.ring.token_count(),
            strategy = cluster.strategy.name(),
            "cluster bootstrapped"
        );
        Ok(cluster)
    }

    /// Add one node and recompute the replica set of every token.
    ///
    /// The recomputation covers all tokens, not only the new node's: new
    /// tokens can interpose into any existing successor chain.
    pub fn add_node(&mut self) -> Result<NodeId> {
        let id = self.register_node()?;
        self.strategy
            .update_placement(&self.ring, &mut self.placement)?;
        debug!(node = %id, cluster_size = self.ring.node_count(), "node joined");
        Ok(id)
    }

    fn register_node(&mut self) -> Result<NodeId> {
        let id = NodeId(self.next_node);
        self.next_node += 1;

        let mut node = Node::with_num_tokens(id, format!("node-{}", id.0), self.num_tokens);
        node.generate_tokens(&mut self.ring, &mut self.rng)?;
        self.ring.add_node(node);
        Ok(id)
    }

    /// Number of distinct replica-group identities across all tokens.
    /// Idempotent between mutations.
    pub fn distinct_group_count(&self) -> usize {
        self.placement.distinct_group_count()
    }

    pub fn node_count(&self) -> usize {
        self.ring.node_count()
    }

    pub fn ring(&self) -> &TokenRing {
        &self.ring
    }

    pub fn placement(&self) -> &PlacementMap {
        &self.placement
    }
}
