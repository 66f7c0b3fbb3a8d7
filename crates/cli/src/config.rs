//! Command-line configuration for the simulation driver.

use clap::Parser;
use replication::ClusterConfig;

/// Measure how many distinct replica groups arise as nodes join a
/// consistent-hash ring with virtual-node token assignment.
#[derive(Debug, Parser)]
#[command(name = "ringsim", version, about)]
pub struct SimArgs {
    /// Target replica-set size (also the bootstrap node count).
    #[arg(long, default_value_t = 3)]
    pub replication_factor: usize,

    /// Vnodes generated per node.
    #[arg(long, default_value_t = 256)]
    pub num_tokens: usize,

    /// Size of the token domain [0, token-max).
    #[arg(long, default_value_t = 1_000_000_000)]
    pub token_max: u64,

    /// Stop once the cluster reaches this many nodes.
    #[arg(long, default_value_t = 100)]
    pub max_nodes: usize,

    /// Seed for the token RNG; a fixed seed reproduces the whole run.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Disable the eager secondary-promotion heuristic.
    #[arg(long)]
    pub no_eager_secondary: bool,

    /// Emit one JSON object per step instead of plain text.
    #[arg(long)]
    pub json: bool,
}

impl SimArgs {
    pub fn cluster_config(&self) -> ClusterConfig {
        ClusterConfig {
            replication_factor: self.replication_factor,
            num_tokens: self.num_tokens,
            token_max: self.token_max,
            eager_secondary: !self.no_eager_secondary,
            seed: self.seed,
        }
    }
}
