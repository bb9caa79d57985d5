//! Best-fit placement
//!
//! Keeps every block in an ordered free-space index and answers each request
//! with the smallest block that still holds it, preferring the lowest block
//! id on ties. Queries and updates are O(log m) against the index, O(n log m)
//! for a full run.

use crate::block::Placement;
use crate::policy::index::FreeSpaceIndex;
use crate::policy::FitPolicy;

/// Best-fit policy backed by the ordered free-space index.
#[derive(Debug, Clone)]
pub struct BestFit {
    index: FreeSpaceIndex,
}

impl BestFit {
    /// Create the policy with the given initial block sizes.
    pub fn new(block_sizes: &[u64]) -> Self {
        BestFit {
            index: FreeSpaceIndex::from_sizes(block_sizes),
        }
    }
}

impl FitPolicy for BestFit {
    fn name(&self) -> &'static str {
        "best-fit"
    }

    fn place(&mut self, request: u64) -> Placement {
        match self.index.smallest_at_least(request) {
            Some((id, space)) => {
                self.index.reduce(id, space, request);
                tracing::trace!("best-fit: request {} -> block {} ({} free)", request, id, space);
                Placement::Block(id)
            }
            // No entry holds the request; the index is left untouched.
            None => Placement::Unallocated,
        }
    }

    fn residuals(&self) -> Vec<u64> {
        self.index.residuals()
    }
}
