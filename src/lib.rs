//! # fitsim - Static Memory-Partition Allocation Simulator
//!
//! `fitsim` simulates the four classic placement policies used for static
//! partition allocation: **First Fit**, **Next Fit**, **Best Fit** and
//! **Worst Fit**. Given a fixed list of memory block sizes and a sequence of
//! process size requests, each policy decides, for every request in order,
//! which block (if any) receives it and reduces that block's residual space.
//!
//! ## Quick Start
//!
//! ```rust
//! use fitsim::{run_policy, Placement, PolicyKind};
//!
//! let blocks = [200, 500, 100, 300, 600];
//! let requests = [214, 415, 112, 425];
//!
//! let outcome = run_policy(PolicyKind::BestFit, &blocks, &requests);
//!
//! // The tightest block holding 214 is block 3 (size 300).
//! assert_eq!(outcome.placements[0], Placement::Block(3));
//! // A 425 request still fits block 4 after the earlier placements.
//! assert_eq!(outcome.placements[3], Placement::Block(4));
//! ```
//!
//! ## Modules
//!
//! - [`policy`] - the placement engine: one [`FitPolicy`] implementation per
//!   strategy, plus the [`run_policy`] batch entry point
//! - [`block`] - block identity and the [`Placement`] outcome value
//! - [`scenario`] - JSON-backed input configuration
//! - [`report`] - two-column allocation table rendering
//! - [`error`] - error types for the file and CLI boundaries
//!
//! Placement runs are strictly sequential and single-threaded: each call
//! processes its entire request list to completion, and no policy ever
//! revisits an earlier decision.

pub mod block;
pub mod error;
pub mod policy;
pub mod report;
pub mod scenario;

pub use block::{BlockId, Placement};
pub use error::{FitsimError, Result};
pub use policy::{
    run_policy, BestFit, FirstFit, FitPolicy, NextFit, PolicyKind, RunOutcome, WorstFit,
};
pub use report::AllocationReport;
pub use scenario::Scenario;
