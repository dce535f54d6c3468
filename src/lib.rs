//! # Iterative vs Recursive Tape Traversal
//!
//! This library applies one fixed transition rule (shift each letter back by
//! one, wrapping `A → Z` and `a → z`) across a fixed-length tape, using two
//! strategies with identical output and opposite stack profiles.
//!
//! ## Core Components
//!
//! 1. **Machine**: tape, transition rule, iterative and recursive strategies
//! 2. **Space**: stack budget and the worker-stack failure boundary
//! 3. **Harness**: interactive decode and single-size benchmark requests
//!
//! Stack exhaustion in the recursive strategy is a typed outcome
//! ([`RecursiveOutcome::StackOverflow`]), never a process crash.
//!
//! ## Usage Example
//!
//! ```
//! use tapewalk::{Harness, HarnessConfig};
//!
//! let harness = Harness::new(HarnessConfig::default())?;
//! let report = harness.decode_interactive(b"IFMMP")?;
//! assert_eq!(report.iterative.output, b"HELLO");
//! # Ok::<(), tapewalk::HarnessError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod harness; // Decode and benchmark requests
pub mod machine; // Tape, rule and strategies
pub mod space; // Stack budget and failure boundary
pub mod util; // Presentation helpers

// Re-exports for convenience
pub use harness::{
    BenchmarkReport, DecodeReport, Harness, HarnessConfig, HarnessError, RecursiveOutcome,
    SkipReason,
};
pub use machine::{shift_back, Strategy, Symbol, Tape, TapeMachine};
pub use space::StackBudget;

use thiserror::Error;

/// Errors raised by a traversal strategy
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    /// Recursion needed more frames than the stack budget allows
    #[error("stack overflow: recursion reached depth {depth}, budget allows {limit}")]
    StackExhausted {
        /// Depth of the frame that would have exceeded the budget
        depth: usize,
        /// Maximum depth allowed
        limit: usize,
    },
}
