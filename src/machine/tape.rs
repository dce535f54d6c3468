//! Fixed-length tape
//!
//! Dense byte storage, allocated once and never resized. Cells are only
//! rewritten in place by the traversal strategies.

use super::Symbol;

/// Repeating pattern used for synthetic benchmark tapes ("HELLO" shifted forward)
pub const BENCHMARK_PATTERN: &[Symbol] = b"IFMMP";

/// Mutable, fixed-length sequence of symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Box<[Symbol]>,
}

impl Tape {
    /// Create tape holding a copy of caller-supplied input
    pub fn from_input(input: &[Symbol]) -> Self {
        Self {
            cells: input.into(),
        }
    }

    /// Create synthetic tape of `len` cells filled with [`BENCHMARK_PATTERN`]
    pub fn from_pattern(len: usize) -> Self {
        let cells = BENCHMARK_PATTERN
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect();
        Self { cells }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if tape has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read symbol at position (None past the end)
    pub fn read(&self, position: usize) -> Option<Symbol> {
        self.cells.get(position).copied()
    }

    /// Borrow all cells
    pub fn as_bytes(&self) -> &[Symbol] {
        &self.cells
    }

    /// Mutable view used by the strategies; length cannot change through it
    pub(crate) fn cells_mut(&mut self) -> &mut [Symbol] {
        &mut self.cells
    }

    /// Release the cells as an owned buffer
    pub fn into_bytes(self) -> Vec<Symbol> {
        self.cells.into_vec()
    }
}
