//! Harness configuration
//!
//! Ceilings are empirical defaults for a 64 MiB worker stack, not portable
//! guarantees; recalibrate them together with the [`StackBudget`] per host.

use super::HarnessError;
use crate::space::{StackBudget, MIN_FRAME_BYTES, MIN_RESERVE_BYTES};

/// Longest interactive input for which recursion is attempted
pub const DEFAULT_INTERACTIVE_CEILING: usize = 50_000;

/// Largest benchmark size for which recursion is attempted
pub const DEFAULT_BENCHMARK_CEILING: usize = 15_000_000;

/// Sizes driven by the external ladder runner, ascending
pub const BENCHMARK_LADDER: [usize; 12] = [
    100,
    1_000,
    5_000,
    10_000,
    50_000,
    100_000,
    500_000,
    1_000_000,
    5_000_000,
    10_000_000,
    50_000_000,
    100_000_000,
];

/// Tunables for [`Harness`](super::Harness)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Interactive inputs longer than this skip the recursive strategy
    pub interactive_ceiling: usize,

    /// Benchmark sizes above this skip the recursive strategy
    pub benchmark_ceiling: usize,

    /// Benchmark ladder (consumed by the caller, never iterated internally)
    pub ladder: Vec<usize>,

    /// Worker stack for the recursive strategy
    pub stack: StackBudget,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            interactive_ceiling: DEFAULT_INTERACTIVE_CEILING,
            benchmark_ceiling: DEFAULT_BENCHMARK_CEILING,
            ladder: BENCHMARK_LADDER.to_vec(),
            stack: StackBudget::default(),
        }
    }
}

impl HarnessConfig {
    /// Set interactive ceiling
    pub fn with_interactive_ceiling(mut self, ceiling: usize) -> Self {
        self.interactive_ceiling = ceiling;
        self
    }

    /// Set benchmark ceiling
    pub fn with_benchmark_ceiling(mut self, ceiling: usize) -> Self {
        self.benchmark_ceiling = ceiling;
        self
    }

    /// Replace the ladder
    pub fn with_ladder(mut self, ladder: Vec<usize>) -> Self {
        self.ladder = ladder;
        self
    }

    /// Set the recursion stack budget
    pub fn with_stack(mut self, stack: StackBudget) -> Self {
        self.stack = stack;
        self
    }

    /// Check invariants between the tunables
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.interactive_ceiling == 0 || self.benchmark_ceiling == 0 {
            return Err(HarnessError::InvalidConfig(
                "recursion ceilings must be > 0".to_string(),
            ));
        }
        if self.interactive_ceiling > self.benchmark_ceiling {
            return Err(HarnessError::InvalidConfig(format!(
                "interactive ceiling {} exceeds benchmark ceiling {}",
                self.interactive_ceiling, self.benchmark_ceiling
            )));
        }
        if self.ladder.is_empty() {
            return Err(HarnessError::InvalidConfig(
                "benchmark ladder is empty".to_string(),
            ));
        }
        if self.ladder[0] == 0 {
            return Err(HarnessError::InvalidConfig(
                "benchmark ladder sizes must be > 0".to_string(),
            ));
        }
        if let Some(pair) = self.ladder.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(HarnessError::InvalidConfig(format!(
                "benchmark ladder must be strictly ascending ({} then {})",
                pair[0], pair[1]
            )));
        }
        if self.stack.frame_bytes < MIN_FRAME_BYTES {
            return Err(HarnessError::InvalidConfig(format!(
                "frame estimate of {} bytes is below the {}-byte floor",
                self.stack.frame_bytes, MIN_FRAME_BYTES
            )));
        }
        if self.stack.reserve_bytes < MIN_RESERVE_BYTES {
            return Err(HarnessError::InvalidConfig(format!(
                "stack reserve of {} bytes is below the {}-byte floor",
                self.stack.reserve_bytes, MIN_RESERVE_BYTES
            )));
        }
        if self.stack.max_depth() == 0 {
            return Err(HarnessError::InvalidConfig(format!(
                "stack budget of {} bytes holds no {}-byte frames",
                self.stack.stack_bytes, self.stack.frame_bytes
            )));
        }
        Ok(())
    }
}
