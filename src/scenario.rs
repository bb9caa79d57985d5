//! Scenario inputs for placement runs
//!
//! A scenario pairs the fixed block sizes with the request sequence and can
//! be persisted as JSON for the demo driver. Degenerate scenarios (no
//! blocks, no requests) are valid inputs, not errors.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Input pair for a placement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Total size of each memory block, indexed by block id.
    pub block_sizes: Vec<u64>,
    /// Requested size of each process, indexed by process id.
    pub request_sizes: Vec<u64>,
}

impl Scenario {
    /// Create a scenario from block and request sizes.
    pub fn new(block_sizes: Vec<u64>, request_sizes: Vec<u64>) -> Self {
        Scenario {
            block_sizes,
            request_sizes,
        }
    }

    /// The classic five-block demonstration scenario.
    pub fn classroom_example() -> Self {
        Scenario::new(vec![200, 500, 100, 300, 600], vec![214, 415, 112, 425])
    }

    /// Parse a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the scenario to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the scenario to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
