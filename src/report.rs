//! Allocation table rendering
//!
//! Renders a placement sequence as the familiar two-column table of process
//! id and assigned block id, with unallocated requests spelled out.

use crate::block::Placement;
use std::fmt;

/// Two-column allocation table for one policy run.
#[derive(Debug, Clone)]
pub struct AllocationReport {
    policy: String,
    placements: Vec<Placement>,
}

impl AllocationReport {
    /// Build a report for one policy's placement sequence.
    pub fn new(policy: impl Into<String>, placements: Vec<Placement>) -> Self {
        AllocationReport {
            policy: policy.into(),
            placements,
        }
    }

    /// Number of requests that received a block.
    pub fn allocated(&self) -> usize {
        self.placements.iter().filter(|p| !p.is_unallocated()).count()
    }

    /// Number of requests no block could hold.
    pub fn unallocated(&self) -> usize {
        self.placements.len() - self.allocated()
    }
}

impl fmt::Display for AllocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Policy: {}", self.policy)?;
        writeln!(f, "Process No.\tBlock No.")?;
        writeln!(f, "===========\t=========")?;
        for (process, placement) in self.placements.iter().enumerate() {
            match placement.block_id() {
                Some(block) => writeln!(f, " {}\t\t{}", process, block)?,
                None => writeln!(f, " {}\t\tNot Allocated", process)?,
            }
        }
        Ok(())
    }
}
