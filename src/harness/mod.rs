//! Interactive decode and benchmark harness
//!
//! Drives both strategies over one request's tape, times them and packages
//! the outcome. Strategies run sequentially; the recursive one runs on a
//! worker stack sized by the configured [`StackBudget`](crate::space::StackBudget)
//! and is joined before the request returns.

mod config;
mod report;

pub use config::{
    HarnessConfig, BENCHMARK_LADDER, DEFAULT_BENCHMARK_CEILING, DEFAULT_INTERACTIVE_CEILING,
};
pub use report::{
    BenchmarkReport, DecodeReport, Decoded, Measured, OutputDigest, RecursiveOutcome, SkipReason,
};

use crate::machine::{Tape, TapeMachine};
use crate::{space, TraversalError};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info_span, warn};

/// Errors raised by the harness itself (never by a strategy)
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration invariants violated
    #[error("invalid harness configuration: {0}")]
    InvalidConfig(String),

    /// Benchmark size must be positive
    #[error("benchmark size must be > 0")]
    EmptyBenchmark,

    /// Recursion worker thread could not be started
    #[error("failed to spawn recursion worker: {0}")]
    Worker(#[from] std::io::Error),
}

/// Runs decode and benchmark requests against a fixed configuration
#[derive(Debug, Clone)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Create harness after validating `config`
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Benchmark ladder for external drivers
    pub fn ladder(&self) -> &[usize] {
        &self.config.ladder
    }

    /// Decode arbitrary text with both strategies
    ///
    /// The iterative result is always present. Recursion is skipped for
    /// inputs longer than the interactive ceiling.
    pub fn decode_interactive(&self, text: &[u8]) -> Result<DecodeReport, HarnessError> {
        let _span = info_span!("decode", len = text.len()).entered();

        let (tape, elapsed) = time_iterative(Tape::from_input(text));
        let iterative = Decoded {
            output: tape.into_bytes(),
            elapsed,
        };

        let ceiling = self.config.interactive_ceiling;
        let recursive = if text.len() > ceiling {
            let reason = SkipReason::TooLongForInteractive {
                len: text.len(),
                ceiling,
            };
            warn!(%reason, "recursive strategy skipped");
            RecursiveOutcome::Skipped { reason }
        } else {
            self.isolated_recursive(Tape::from_input(text), |tape, elapsed| Decoded {
                output: tape.into_bytes(),
                elapsed,
            })?
        };

        Ok(DecodeReport {
            input_len: text.len(),
            iterative,
            recursive,
        })
    }

    /// Benchmark both strategies on a synthetic tape of `size` cells
    ///
    /// Each strategy gets its own freshly built tape; the timer starts after
    /// construction. Recursion is skipped above the benchmark ceiling.
    pub fn benchmark_size(&self, size: usize) -> Result<BenchmarkReport, HarnessError> {
        if size == 0 {
            return Err(HarnessError::EmptyBenchmark);
        }
        let _span = info_span!("benchmark", size).entered();

        let (tape, elapsed) = time_iterative(Tape::from_pattern(size));
        let iterative = Measured {
            elapsed,
            digest: OutputDigest::of(tape.as_bytes()),
        };
        // Release the first tape before the second one is allocated
        drop(tape);

        let ceiling = self.config.benchmark_ceiling;
        let recursive = if size > ceiling {
            let reason = SkipReason::TooLargeForBenchmark { size, ceiling };
            warn!(%reason, "recursive strategy skipped");
            RecursiveOutcome::Skipped { reason }
        } else {
            self.isolated_recursive(Tape::from_pattern(size), |tape, elapsed| Measured {
                elapsed,
                digest: OutputDigest::of(tape.as_bytes()),
            })?
        };

        Ok(BenchmarkReport {
            size,
            iterative,
            recursive,
        })
    }

    /// Run the recursive strategy behind the worker-stack boundary
    ///
    /// Stack exhaustion becomes [`RecursiveOutcome::StackOverflow`] and the
    /// partial tape is dropped on the worker. Panics propagate unchanged.
    fn isolated_recursive<T>(
        &self,
        tape: Tape,
        complete: impl FnOnce(Tape, Duration) -> T,
    ) -> Result<RecursiveOutcome<T>, HarnessError> {
        let budget = self.config.stack;
        let max_depth = budget.max_depth();
        let machine = TapeMachine::new(tape);

        debug!(max_depth, stack_bytes = budget.stack_bytes, "recursive strategy running");
        let run = space::run_on_worker_stack(&budget, move || {
            let start = Instant::now();
            machine
                .run_recursive(max_depth)
                .map(|tape| (tape, start.elapsed()))
        })?;

        Ok(match run {
            Ok((tape, elapsed)) => {
                debug!(?elapsed, "recursive strategy completed");
                RecursiveOutcome::Completed(complete(tape, elapsed))
            }
            Err(TraversalError::StackExhausted { depth, limit }) => {
                warn!(depth, limit, "recursive strategy exhausted its stack");
                RecursiveOutcome::StackOverflow { depth, limit }
            }
        })
    }
}

fn time_iterative(tape: Tape) -> (Tape, Duration) {
    let machine = TapeMachine::new(tape);
    debug!("iterative strategy running");
    let start = Instant::now();
    let tape = machine.run_iterative();
    let elapsed = start.elapsed();
    debug!(?elapsed, "iterative strategy completed");
    (tape, elapsed)
}
