//! Tape machine and traversal strategies
//!
//! A single-tape machine with one fixed transition rule and a head that only
//! moves right. The machine halts when the head runs past the end of the tape.
//! Two strategies drive the head:
//! - **Iterative**: loop counter, O(1) auxiliary stack
//! - **Recursive**: one call frame per cell, depth = tape length

mod tape;
mod transition;

pub use tape::{Tape, BENCHMARK_PATTERN};
pub use transition::{shift_back, shift_back_by, ALPHABET_LEN};

use crate::TraversalError;
use std::fmt;

/// Tape symbol (one byte)
pub type Symbol = u8;

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Loop-driven traversal
    Iterative,
    /// Self-invoking traversal
    Recursive,
}

impl Strategy {
    /// Both strategies, in the order a request runs them
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-tape machine: tape plus head position
///
/// Running a strategy consumes the machine. A failed run drops the tape with
/// it, so partially rewritten cells can never be read back.
#[derive(Debug, Clone)]
pub struct TapeMachine {
    tape: Tape,
    head: usize,
}

impl TapeMachine {
    /// Create machine with head on cell 0
    pub fn new(tape: Tape) -> Self {
        Self { tape, head: 0 }
    }

    /// Current head position (next unprocessed cell)
    pub fn head(&self) -> usize {
        self.head
    }

    /// Borrow tape
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// True once the head has run past the last cell
    pub fn is_halted(&self) -> bool {
        self.head >= self.tape.len()
    }

    /// Execute one step: rewrite the cell under the head and move right
    ///
    /// Returns false (and does nothing) if already halted.
    pub fn step(&mut self) -> bool {
        let head = self.head;
        match self.tape.cells_mut().get_mut(head) {
            Some(cell) => {
                *cell = shift_back(*cell);
                self.head = head + 1;
                true
            }
            None => false,
        }
    }

    /// Run to completion with a loop
    ///
    /// Stack usage does not depend on tape length; always terminates.
    pub fn run_iterative(mut self) -> Tape {
        while self.step() {}
        self.tape
    }

    /// Run to completion with one recursive call per remaining cell
    ///
    /// Fails with [`TraversalError::StackExhausted`] once the recursion would
    /// need more than `max_depth` frames. The check is explicit: the caller is
    /// responsible for running this on a stack large enough for `max_depth`
    /// frames (see [`crate::space::run_on_worker_stack`]).
    pub fn run_recursive(mut self, max_depth: usize) -> Result<Tape, TraversalError> {
        let start = self.head;
        recursive_step(self.tape.cells_mut(), start, start, max_depth)?;
        Ok(self.tape)
    }

    /// Run with the given strategy on the current stack
    pub fn run(self, strategy: Strategy, max_depth: usize) -> Result<Tape, TraversalError> {
        match strategy {
            Strategy::Iterative => Ok(self.run_iterative()),
            Strategy::Recursive => self.run_recursive(max_depth),
        }
    }
}

/// One frame per cell; depth of the frame handling `head` is `head - origin + 1`
fn recursive_step(
    cells: &mut [Symbol],
    head: usize,
    origin: usize,
    max_depth: usize,
) -> Result<(), TraversalError> {
    let Some(cell) = cells.get_mut(head) else {
        return Ok(());
    };
    let depth = head - origin + 1;
    if depth > max_depth {
        return Err(TraversalError::StackExhausted {
            depth,
            limit: max_depth,
        });
    }
    *cell = shift_back(*cell);
    recursive_step(cells, head + 1, origin, max_depth)?;
    // Keeps this frame live across the call so it is not turned into a loop
    std::hint::black_box(depth);
    Ok(())
}
