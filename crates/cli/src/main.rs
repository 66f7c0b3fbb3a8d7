//! Simulation driver: grow the cluster one node at a time and report the
//! distinct replica-group count at each size.

use clap::Parser;
use cli::{SimArgs, StepReport};
use replication::Cluster;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = SimArgs::parse();
    if args.replication_factor == 0 {
        anyhow::bail!("replication factor must be at least 1");
    }
    if args.max_nodes < args.replication_factor {
        anyhow::bail!(
            "max nodes ({}) must be at least the replication factor ({})",
            args.max_nodes,
            args.replication_factor
        );
    }

    tracing::info!(
        replication_factor = args.replication_factor,
        num_tokens = args.num_tokens,
        token_max = args.token_max,
        max_nodes = args.max_nodes,
        seed = args.seed,
        eager_secondary = !args.no_eager_secondary,
        "starting simulation"
    );

    let mut cluster = Cluster::bootstrap(&args.cluster_config())?;

    for _ in (args.replication_factor + 1)..=args.max_nodes {
        cluster.add_node()?;
        let report = StepReport {
            cluster_size: cluster.node_count(),
            groups: cluster.distinct_group_count(),
        };
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "cluster size: {}, groups: {}",
                report.cluster_size, report.groups
            );
        }
    }

    Ok(())
}
