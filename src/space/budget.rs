//! Stack budget for recursion

/// Default worker stack: 64 MiB
pub const DEFAULT_STACK_BYTES: usize = 64 * 1024 * 1024;

/// Conservative upper estimate of one recursive frame (unoptimized builds
/// use far larger frames than release builds)
pub const DEFAULT_FRAME_BYTES: usize = 512;

/// Headroom kept for thread startup and the frames below the recursion
pub const DEFAULT_RESERVE_BYTES: usize = 64 * 1024;

/// Smallest accepted frame estimate; covers an unoptimized recursive frame
/// with room to spare, so calibration may only raise it
pub const MIN_FRAME_BYTES: usize = 512;

/// Smallest accepted reserve
pub const MIN_RESERVE_BYTES: usize = 16 * 1024;

/// Bytes of worker stack available to the recursive strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackBudget {
    /// Total stack size requested for the worker thread
    pub stack_bytes: usize,

    /// Estimated bytes per recursive frame
    pub frame_bytes: usize,

    /// Bytes not available to recursion
    pub reserve_bytes: usize,
}

impl Default for StackBudget {
    fn default() -> Self {
        Self {
            stack_bytes: DEFAULT_STACK_BYTES,
            frame_bytes: DEFAULT_FRAME_BYTES,
            reserve_bytes: DEFAULT_RESERVE_BYTES,
        }
    }
}

impl StackBudget {
    /// Budget with a worker stack of `stack_bytes` and default frame estimate
    pub fn with_stack_bytes(stack_bytes: usize) -> Self {
        Self {
            stack_bytes,
            ..Self::default()
        }
    }

    /// Budget sized so that [`max_depth`](Self::max_depth) is exactly `depth`
    pub fn with_max_depth(depth: usize) -> Self {
        let base = Self::default();
        Self {
            stack_bytes: base
                .reserve_bytes
                .saturating_add(depth.saturating_mul(base.frame_bytes)),
            ..base
        }
    }

    /// Override the per-frame estimate, keeping the stack size
    pub fn frame_bytes(mut self, frame_bytes: usize) -> Self {
        self.frame_bytes = frame_bytes;
        self
    }

    /// Maximum recursion depth this budget allows
    ///
    /// `(stack_bytes - reserve_bytes) / frame_bytes`, zero if the budget is
    /// smaller than its reserve or the frame estimate is zero.
    pub fn max_depth(&self) -> usize {
        if self.frame_bytes == 0 {
            return 0;
        }
        self.stack_bytes.saturating_sub(self.reserve_bytes) / self.frame_bytes
    }

    /// True if a tape of `len` cells fits in the budget
    pub fn fits(&self, len: usize) -> bool {
        len <= self.max_depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth() {
        let budget = StackBudget::default();
        assert_eq!(
            budget.max_depth(),
            (DEFAULT_STACK_BYTES - DEFAULT_RESERVE_BYTES) / DEFAULT_FRAME_BYTES
        );
        // Default must cover the interactive ceiling but not a million frames
        assert!(budget.fits(crate::harness::DEFAULT_INTERACTIVE_CEILING));
        assert!(!budget.fits(1_000_000));
    }

    #[test]
    fn test_exact_depth() {
        for depth in [0, 1, 17, 10_000] {
            assert_eq!(StackBudget::with_max_depth(depth).max_depth(), depth);
        }
    }

    #[test]
    fn test_defaults_clear_floors() {
        assert!(DEFAULT_FRAME_BYTES >= MIN_FRAME_BYTES);
        assert!(DEFAULT_RESERVE_BYTES >= MIN_RESERVE_BYTES);
        let exact = StackBudget::with_max_depth(10);
        assert!(exact.frame_bytes >= MIN_FRAME_BYTES && exact.reserve_bytes >= MIN_RESERVE_BYTES);
    }

    #[test]
    fn test_degenerate_budgets() {
        assert_eq!(StackBudget::with_stack_bytes(1024).max_depth(), 0);
        assert_eq!(StackBudget::default().frame_bytes(0).max_depth(), 0);
    }
}
