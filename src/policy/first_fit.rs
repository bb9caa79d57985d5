//! First-fit placement
//!
//! Scans blocks from id 0 upward for every request and takes the first one
//! with sufficient residual space. The scan restarts at block 0 for each
//! request, so low-id blocks absorb most of the traffic.

use crate::block::Placement;
use crate::policy::FitPolicy;

/// First-fit policy over a private copy of the block sizes.
#[derive(Debug, Clone)]
pub struct FirstFit {
    /// Residual space per block, indexed by block id.
    blocks: Vec<u64>,
}

impl FirstFit {
    /// Create the policy with the given initial block sizes.
    pub fn new(block_sizes: &[u64]) -> Self {
        FirstFit {
            blocks: block_sizes.to_vec(),
        }
    }
}

impl FitPolicy for FirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn place(&mut self, request: u64) -> Placement {
        for (id, space) in self.blocks.iter_mut().enumerate() {
            if *space >= request {
                *space -= request;
                tracing::trace!("first-fit: request {} -> block {}", request, id);
                return Placement::Block(id);
            }
        }
        Placement::Unallocated
    }

    fn residuals(&self) -> Vec<u64> {
        self.blocks.clone()
    }
}
