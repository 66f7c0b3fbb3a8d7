//! Replica placement strategies.
//!
//! A strategy determines which nodes form the replica group of each token.
//! The simulation ships one:
//!
//! - **SimpleStrategy**: clockwise walk from the token, with an eager
//!   secondary-promotion step that changes which node combinations co-occur
//!   as groups.

pub mod simple;

pub use simple::SimpleStrategy;

use corelib::TokenRing;

use crate::error::Result;
use crate::placement::PlacementMap;

/// Trait for replica placement strategies.
///
/// Implementations must be thread-safe (Send + Sync) so they can be shared
/// freely, even though the simulation itself is single-threaded.
pub trait ReplicationStrategy: Send + Sync + 'static {
    /// Target replica-group size.
    fn replication_factor(&self) -> usize;

    /// Recompute the replica set of **every** registered token, in ascending
    /// token order, rewriting `placement` entry by entry.
    ///
    /// The pass must cover all tokens, not only recently added ones: a new
    /// node's tokens can change the successor chain of any existing token.
    /// Given identical `(ring, placement)` inputs the result is identical.
    fn update_placement(&self, ring: &TokenRing, placement: &mut PlacementMap) -> Result<()>;

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}
