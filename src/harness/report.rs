//! Result records returned to callers

use std::fmt;
use std::time::Duration;

#[cfg(feature = "json")]
use serde::Serialize;

/// Fingerprint of a completed tape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputDigest(blake3::Hash);

impl OutputDigest {
    /// Hash tape contents
    pub fn of(bytes: &[u8]) -> Self {
        Self(blake3::hash(bytes))
    }
}

impl fmt::Display for OutputDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[cfg(feature = "json")]
impl Serialize for OutputDigest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Completed interactive run: decoded bytes and time
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Decoded {
    /// Tape contents after the traversal
    #[cfg_attr(feature = "json", serde(serialize_with = "json::lossy_text"))]
    pub output: Vec<u8>,

    /// Traversal time, excluding tape construction
    #[cfg_attr(
        feature = "json",
        serde(rename = "elapsed_ms", serialize_with = "json::millis")
    )]
    pub elapsed: Duration,
}

impl Decoded {
    /// Elapsed milliseconds at microsecond resolution
    pub fn elapsed_ms(&self) -> f64 {
        millis(self.elapsed)
    }

    /// Output as text (invalid UTF-8 replaced)
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Completed benchmark run: time and output fingerprint
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Measured {
    /// Traversal time, excluding tape construction
    #[cfg_attr(
        feature = "json",
        serde(rename = "elapsed_ms", serialize_with = "json::millis")
    )]
    pub elapsed: Duration,

    /// Digest of the tape after the traversal
    pub digest: OutputDigest,
}

impl Measured {
    /// Elapsed milliseconds at microsecond resolution
    pub fn elapsed_ms(&self) -> f64 {
        millis(self.elapsed)
    }
}

/// Why the recursive strategy was not attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SkipReason {
    /// Interactive input longer than the interactive ceiling
    TooLongForInteractive {
        /// Input length
        len: usize,
        /// Configured ceiling
        ceiling: usize,
    },

    /// Benchmark size above the benchmark ceiling
    TooLargeForBenchmark {
        /// Requested size
        size: usize,
        /// Configured ceiling
        ceiling: usize,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooLongForInteractive { len, ceiling } => write!(
                f,
                "input of {len} bytes is too long for manual recursive mode (limit {ceiling}); use the benchmark"
            ),
            SkipReason::TooLargeForBenchmark { size, ceiling } => {
                write!(f, "skipped, {size} is too big (limit {ceiling})")
            }
        }
    }
}

/// Outcome of the recursive strategy
///
/// Only `Completed` carries output or timing; a skipped or overflowed run has
/// nothing that could be shown as a valid result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
#[cfg_attr(feature = "json", serde(tag = "status", rename_all = "snake_case"))]
pub enum RecursiveOutcome<T> {
    /// Ran to the end of the tape
    Completed(T),

    /// Not attempted: a ceiling ruled it out
    Skipped {
        /// Which ceiling applied
        reason: SkipReason,
    },

    /// Attempted and ran out of stack
    StackOverflow {
        /// Frame depth at which the run stopped
        depth: usize,
        /// Maximum depth of the stack budget
        limit: usize,
    },
}

impl<T> RecursiveOutcome<T> {
    /// Completed result, if any
    pub fn completed(&self) -> Option<&T> {
        match self {
            RecursiveOutcome::Completed(value) => Some(value),
            _ => None,
        }
    }

    /// True if the strategy ran to completion
    pub fn is_completed(&self) -> bool {
        matches!(self, RecursiveOutcome::Completed(_))
    }

    /// True if the strategy was not attempted
    pub fn is_skipped(&self) -> bool {
        matches!(self, RecursiveOutcome::Skipped { .. })
    }

    /// True if the strategy was attempted and exhausted its stack
    pub fn is_stack_overflow(&self) -> bool {
        matches!(self, RecursiveOutcome::StackOverflow { .. })
    }
}

/// Result of [`Harness::decode_interactive`](super::Harness::decode_interactive)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct DecodeReport {
    /// Input length in bytes
    pub input_len: usize,
    /// Iterative run (always completes)
    pub iterative: Decoded,
    /// Recursive run
    pub recursive: RecursiveOutcome<Decoded>,
}

/// Result of [`Harness::benchmark_size`](super::Harness::benchmark_size)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct BenchmarkReport {
    /// Tape length
    pub size: usize,
    /// Iterative run (always completes)
    pub iterative: Measured,
    /// Recursive run
    pub recursive: RecursiveOutcome<Measured>,
}

impl BenchmarkReport {
    /// True if both strategies completed and produced the same tape
    pub fn outputs_agree(&self) -> Option<bool> {
        self.recursive
            .completed()
            .map(|recursive| recursive.digest == self.iterative.digest)
    }
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_micros() as f64 / 1000.0
}

#[cfg(feature = "json")]
mod json {
    use serde::Serializer;
    use std::time::Duration;

    pub(super) fn millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(super::millis(*elapsed))
    }

    #[allow(clippy::ptr_arg)]
    pub(super) fn lossy_text<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(bytes))
    }
}
