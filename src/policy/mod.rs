//! Placement policies for static partition allocation
//!
//! All four strategies share one seam: a [`FitPolicy`] over a fixed set of
//! blocks, queried once per request in input order. The linear-scan policies
//! ([`FirstFit`], [`NextFit`]) keep residual space in a plain vector; the
//! tree-backed policies ([`BestFit`], [`WorstFit`]) keep it in an ordered
//! free-space index with O(log m) queries and updates.
//!
//! Every policy owns a private copy of the block state; the caller's size
//! slice is never mutated. Residual space is observable through
//! [`FitPolicy::residuals`].

pub mod best_fit;
pub mod first_fit;
mod index;
pub mod next_fit;
pub mod worst_fit;

pub use best_fit::BestFit;
pub use first_fit::FirstFit;
pub use next_fit::NextFit;
pub use worst_fit::WorstFit;

use crate::block::Placement;
use crate::error::FitsimError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A placement policy over a fixed set of memory blocks.
///
/// Defines the interface for deciding which block receives each request.
pub trait FitPolicy {
    /// Short policy name used by reports and logs.
    fn name(&self) -> &'static str;

    /// Choose a block for a single request and reduce its residual space.
    ///
    /// Returns [`Placement::Unallocated`] when no block has sufficient
    /// residual space under this policy; block state is left untouched in
    /// that case. Decisions are terminal: a placed request is never moved by
    /// later ones.
    fn place(&mut self, request: u64) -> Placement;

    /// Residual free space per block, indexed by block id.
    fn residuals(&self) -> Vec<u64>;

    /// Place every request in input order, one outcome per request.
    fn place_all(&mut self, requests: &[u64]) -> Vec<Placement> {
        requests.iter().map(|&request| self.place(request)).collect()
    }
}

/// Which placement rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    FirstFit,
    NextFit,
    BestFit,
    WorstFit,
}

impl PolicyKind {
    /// Every policy, in the conventional presentation order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::FirstFit,
        PolicyKind::NextFit,
        PolicyKind::BestFit,
        PolicyKind::WorstFit,
    ];

    /// Human-readable policy name.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::FirstFit => "first-fit",
            PolicyKind::NextFit => "next-fit",
            PolicyKind::BestFit => "best-fit",
            PolicyKind::WorstFit => "worst-fit",
        }
    }

    /// Construct the policy over the given initial block sizes.
    pub fn build(self, block_sizes: &[u64]) -> Box<dyn FitPolicy> {
        match self {
            PolicyKind::FirstFit => Box::new(FirstFit::new(block_sizes)),
            PolicyKind::NextFit => Box::new(NextFit::new(block_sizes)),
            PolicyKind::BestFit => Box::new(BestFit::new(block_sizes)),
            PolicyKind::WorstFit => Box::new(WorstFit::new(block_sizes)),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = FitsimError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-fit" | "first_fit" | "firstfit" | "first" => Ok(PolicyKind::FirstFit),
            "next-fit" | "next_fit" | "nextfit" | "next" => Ok(PolicyKind::NextFit),
            "best-fit" | "best_fit" | "bestfit" | "best" => Ok(PolicyKind::BestFit),
            "worst-fit" | "worst_fit" | "worstfit" | "worst" => Ok(PolicyKind::WorstFit),
            _ => Err(FitsimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Outcome of running one policy over a full request sequence.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// The policy that produced this outcome.
    pub policy: PolicyKind,
    /// One placement per request, in request order.
    pub placements: Vec<Placement>,
    /// Final residual space per block, indexed by block id.
    pub residuals: Vec<u64>,
}

/// Run a single policy over a scenario's block and request sizes.
///
/// The caller's `block_sizes` slice is never mutated; residual space is
/// tracked inside the policy and returned with the outcome.
pub fn run_policy(kind: PolicyKind, block_sizes: &[u64], requests: &[u64]) -> RunOutcome {
    let mut policy = kind.build(block_sizes);
    let placements = policy.place_all(requests);
    let placed = placements.iter().filter(|p| !p.is_unallocated()).count();
    tracing::debug!(
        "{}: placed {}/{} requests across {} blocks",
        kind.name(),
        placed,
        requests.len(),
        block_sizes.len()
    );
    RunOutcome {
        policy: kind,
        placements,
        residuals: policy.residuals(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_parse() {
        assert_eq!("first-fit".parse::<PolicyKind>().unwrap(), PolicyKind::FirstFit);
        assert_eq!("NEXT_FIT".parse::<PolicyKind>().unwrap(), PolicyKind::NextFit);
        assert_eq!("best".parse::<PolicyKind>().unwrap(), PolicyKind::BestFit);
        assert_eq!("WorstFit".parse::<PolicyKind>().unwrap(), PolicyKind::WorstFit);
    }

    #[test]
    fn test_unknown_policy_name_is_rejected() {
        let err = "quick-fit".parse::<PolicyKind>().unwrap_err();
        assert!(matches!(err, FitsimError::UnknownPolicy(name) if name == "quick-fit"));
    }

    #[test]
    fn test_round_trip_name_parse() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.name().parse::<PolicyKind>().unwrap(), kind);
        }
    }
}
