//! Replica placement for the ring simulation.
//!
//! This crate turns ring state into replica groups:
//! - Replica sets with an order-independent canonical identity
//! - The placement strategy (clockwise walk + eager secondary promotion)
//! - Distinct-group counting over all tokens
//! - The `Cluster` driver surface: bootstrap, add a node, count groups

pub mod cluster;
pub mod error;
pub mod placement;
pub mod strategy;

pub use cluster::{Cluster, ClusterConfig};
pub use error::ReplicationError;
pub use placement::{GroupIdentity, PlacementMap, ReplicaSet};
pub use strategy::{ReplicationStrategy, SimpleStrategy};
