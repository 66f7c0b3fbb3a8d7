//! Driver for the replica-group simulation.
//!
//! Thin glue around the `replication` crate: configuration, logging setup,
//! and the add-one-node-at-a-time reporting loop.

pub mod config;
pub mod report;

pub use config::SimArgs;
pub use report::StepReport;
