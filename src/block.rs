//! Block identity and placement outcomes

use serde::{Deserialize, Serialize};

/// Identifier of a memory block: its position in the original size list.
pub type BlockId = usize;

/// Outcome of a single placement request.
///
/// Either the id of the block the request was placed in, or an explicit
/// "no block had room" marker. Requests are never split across blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// The request was placed in the block with this id.
    Block(BlockId),
    /// No block had sufficient residual space under the active policy.
    Unallocated,
}

impl Placement {
    /// The assigned block id, if any.
    pub fn block_id(self) -> Option<BlockId> {
        match self {
            Placement::Block(id) => Some(id),
            Placement::Unallocated => None,
        }
    }

    /// True if the request could not be placed.
    pub fn is_unallocated(self) -> bool {
        matches!(self, Placement::Unallocated)
    }
}
