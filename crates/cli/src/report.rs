//! Per-step driver output.

use serde::Serialize;

/// One line of driver output: the cluster size after a node joined and the
/// distinct replica-group count at that size.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StepReport {
    pub cluster_size: usize,
    pub groups: usize,
}
